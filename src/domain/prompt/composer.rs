//! Prompt Composer
//!
//! 纯函数：相同输入必然得到逐字节相同的输出

use crate::domain::{FormatCatalog, GenerationRequest, VoiceProfile};

const STYLE_GUIDELINES: [&str; 9] = [
    "ALWAYS blend psychological insight with Torah wisdom - this is the hallmark of Shaya's approach",
    "Use rhetorical questions to engage readers and drive the narrative forward",
    "Reference Rebbe Nachman's teachings (especially Likutey Moharan) as the primary source",
    "Include practical, actionable takeaways - not just abstract philosophy",
    "Write with warmth and hope - even when discussing difficult topics like suffering",
    "Use biblical figures (Yaakov, Esav, etc.) as illustrations for psychological concepts",
    "End with an encouraging call to action or reflection",
    "Balance Hebrew terms with English explanations - don't over-saturate",
    "Keep the tone accessible to both religious and secular readers interested in wisdom",
];

const AUTHENTICITY: &str = "Write as if you ARE Shaya Sussman, drawing from the same well of \
Breslov wisdom, psychological training, and genuine care for the reader's spiritual and \
emotional wellbeing. The content should feel like it naturally flows from someone who has \
deeply integrated Torah wisdom with therapeutic insight.";

const REQUEST_OPENING: &str = "Please write content on the following topic:";

const SECTION_SYSTEM: &str = "=== SYSTEM INSTRUCTIONS ===";
const SECTION_FORMAT: &str = "=== FORMAT INSTRUCTIONS ===";
const SECTION_USER: &str = "=== USER REQUEST ===";

/// 模型调用所需的两段提示词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

/// 提示词组装器
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer {
    profile: VoiceProfile,
}

impl PromptComposer {
    pub fn new(profile: VoiceProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }

    /// 系统提示词：人设六个字段（trim 后原样嵌入）+ 九条风格准则
    pub fn system_prompt(&self) -> String {
        let voice = self.profile.trimmed();

        let guidelines = STYLE_GUIDELINES
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a content writer who writes in the exact voice and style of {name}.

## VOICE PROFILE

### Tone
{tone}

### Writing Style Patterns
{style}

### Core Themes
{themes}

### Key Influences to Draw From
{influences}

### Hebrew Vocabulary (use naturally, with translations where helpful)
{vocabulary}

### Common Transitions and Phrases
{transitions}

## CRITICAL STYLE GUIDELINES

{guidelines}

## CONTENT AUTHENTICITY

{AUTHENTICITY}",
            name = voice.name,
            tone = voice.tone,
            style = voice.style_patterns,
            themes = voice.themes,
            influences = voice.influences,
            vocabulary = voice.hebrew_vocabulary,
            transitions = voice.transitions,
        )
    }

    /// 用户提示词：主题行 + 格式说明 + [附加上下文] + 结束语
    pub fn user_prompt(&self, request: &GenerationRequest) -> String {
        let mut sections = vec![
            REQUEST_OPENING.to_string(),
            topic_line(request),
            FormatCatalog::instructions(request.format()).to_string(),
        ];
        if let Some(context) = context_line(request) {
            sections.push(context);
        }
        sections.push(self.closing_line());
        sections.join("\n\n")
    }

    pub fn compose(&self, request: &GenerationRequest) -> ComposedPrompt {
        ComposedPrompt {
            system: self.system_prompt(),
            user: self.user_prompt(request),
        }
    }

    /// 仅提示词模式：三个带标题的段落，可直接粘贴到任意模型
    ///
    /// USER REQUEST 段不重复格式说明
    pub fn render_prompt_only(&self, request: &GenerationRequest) -> String {
        let mut user = vec![REQUEST_OPENING.to_string(), topic_line(request)];
        if let Some(context) = context_line(request) {
            user.push(context);
        }
        user.push(self.closing_line());

        format!(
            "{SECTION_SYSTEM}\n{system}\n\n{SECTION_FORMAT}\n{format}\n\n{SECTION_USER}\n{user}",
            system = self.system_prompt(),
            format = FormatCatalog::instructions(request.format()),
            user = user.join("\n\n"),
        )
    }

    fn closing_line(&self) -> String {
        format!(
            "Write this content now in the authentic voice of {}.",
            self.profile.name.trim()
        )
    }
}

fn topic_line(request: &GenerationRequest) -> String {
    format!("**Topic**: {}", request.topic())
}

fn context_line(request: &GenerationRequest) -> Option<String> {
    request
        .additional_context()
        .map(|context| format!("**Additional Context/Notes**: {}", context))
}
