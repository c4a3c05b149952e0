//! Format Catalog - 格式说明表
//!
//! 每个格式恰好对应一条说明，由 `match` 的穷尽性保证

use super::ContentFormat;

/// 格式条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry {
    pub format: ContentFormat,
    /// 交互式菜单中的显示名
    pub label: &'static str,
    /// 简短描述（用于 /formats）
    pub description: &'static str,
    /// 完整结构说明（原始文本，使用前需 trim）
    pub instructions: &'static str,
}

impl FormatEntry {
    pub fn trimmed_instructions(&self) -> &'static str {
        self.instructions.trim()
    }
}

const ARTICLE: FormatEntry = FormatEntry {
    format: ContentFormat::Article,
    label: "Article/Essay (long-form)",
    description: "Long-form article/essay (800-1200 words)",
    instructions: r#"
## FORMAT: Long-Form Article/Essay

Structure your article as follows:

1. **Opening Hook** (1-2 paragraphs)
   - Start with a teaching from Rebbe Nachman or a compelling question
   - Connect to a universal human experience or struggle

2. **Biblical/Textual Foundation** (2-3 paragraphs)
   - Introduce the Torah source or Breslov teaching
   - Explain the context and key Hebrew terms
   - Use a biblical narrative as illustration

3. **Core Teaching** (3-4 paragraphs)
   - Unpack the deeper meaning
   - Use rhetorical questions to engage
   - Create contrasts (e.g., Yaakov vs. Esav approach)

4. **Personal/Psychological Application** (2-3 paragraphs)
   - Bridge to modern life and emotional struggles
   - Reference psychological concepts naturally
   - Make it practical and relatable

5. **Encouraging Conclusion** (1-2 paragraphs)
   - End with hope and empowerment
   - Include a call to reflection or action
   - Use signature closing style ("Let us take the first step... And then let the journey begin")

Target length: 800-1200 words
"#,
};

const SOCIAL_MEDIA: FormatEntry = FormatEntry {
    format: ContentFormat::SocialMedia,
    label: "Social Media Post",
    description: "Social media post for Instagram, Twitter, etc.",
    instructions: r#"
## FORMAT: Social Media Post

Create an engaging social media post with:

1. **Hook** (first line) - Compelling question or bold statement
2. **Core Wisdom** (2-4 sentences) - The teaching or insight
3. **Personal Application** (1-2 sentences) - How this applies to the reader
4. **Call to Action/Reflection** - Question or encouragement

Style notes:
- Use line breaks for readability
- Can include relevant emojis sparingly (optional)
- Include 3-5 relevant hashtags at the end
- Keep under 280 characters for Twitter or up to 500 for Instagram

Example hashtags: #Breslov #InnerWisdom #Torah #Healing #JewishWisdom #RebbNachman #Emunah
"#,
};

const CLASS_OUTLINE: FormatEntry = FormatEntry {
    format: ContentFormat::ClassOutline,
    label: "Class Outline (Nach Daily style)",
    description: "Nach Daily-style class/shiur outline",
    instructions: r#"
## FORMAT: Class/Shiur Outline (Nach Daily Style)

Structure your class outline as follows:

**Title**: [Topic] | [Source Reference]

**Introduction** (2-3 bullet points)
- Context for the teaching
- Why this matters today
- Key question being addressed

**Main Teaching Points** (4-6 bullet points)
- Clear, concise summaries
- Hebrew terms with translations
- Each point builds on the previous

**Key Quotes**
- 1-2 direct quotes from the source text
- Include Hebrew if relevant with translation

**Psychological/Practical Insights** (2-3 bullet points)
- How this applies to emotional/mental wellbeing
- Modern life applications

**Discussion Questions** (2-3 questions)
- Open-ended questions for reflection
- Connect ancient wisdom to personal experience

**Summary/Takeaway**
- One powerful sentence capturing the essence
"#,
};

const SHORT_REFLECTION: FormatEntry = FormatEntry {
    format: ContentFormat::ShortReflection,
    label: "Short Reflection",
    description: "Brief daily wisdom reflection (75-150 words)",
    instructions: r#"
## FORMAT: Short Reflection/Daily Wisdom

Create a brief, powerful reflection:

1. **Opening Thought** (1-2 sentences)
   - A teaching or insight from Breslov wisdom

2. **Expansion** (2-3 sentences)
   - Brief explanation or elaboration
   - Can include a short example

3. **Closing Encouragement** (1 sentence)
   - Hopeful, empowering conclusion

Total length: 75-150 words
Tone: Contemplative, warm, accessible
"#,
};

/// 格式目录
pub struct FormatCatalog;

impl FormatCatalog {
    pub fn entry(format: ContentFormat) -> &'static FormatEntry {
        match format {
            ContentFormat::Article => &ARTICLE,
            ContentFormat::SocialMedia => &SOCIAL_MEDIA,
            ContentFormat::ClassOutline => &CLASS_OUTLINE,
            ContentFormat::ShortReflection => &SHORT_REFLECTION,
        }
    }

    /// 格式说明（已 trim）
    pub fn instructions(format: ContentFormat) -> &'static str {
        Self::entry(format).trimmed_instructions()
    }

    /// 按 `ContentFormat::ALL` 顺序列出全部条目
    pub fn entries() -> impl Iterator<Item = &'static FormatEntry> {
        ContentFormat::ALL.into_iter().map(Self::entry)
    }
}
