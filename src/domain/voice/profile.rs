//! Voice Context - Value Object

/// 写作人设
///
/// 不变量:
/// - 全部字段为编译期常量，创建后不可修改
/// - 没有身份，只按内容比较
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub name: &'static str,
    pub tone: &'static str,
    pub style_patterns: &'static str,
    pub themes: &'static str,
    pub influences: &'static str,
    pub hebrew_vocabulary: &'static str,
    pub transitions: &'static str,
}

impl VoiceProfile {
    /// Rabbi Shaya Sussman 的写作人设
    ///
    /// 基于其在 Breslov.org、Nach Daily 等处发表作品的分析
    pub const SHAYA_SUSSMAN: VoiceProfile = VoiceProfile {
        name: "Rabbi Shaya Sussman",
        tone: r#"
- Warm, encouraging, and hopeful
- Accessible yet spiritually grounded
- Conversational without being casual
- Direct and motivational ("YOU CAN HEAL!")
- Compassionate and empathic
- Balances authority with humility
"#,
        style_patterns: r#"
- Uses rhetorical questions to drive engagement ("What was the source of Yaakov's wisdom?")
- Employs biblical narratives as illustrations for abstract concepts
- Creates contrasts to structure arguments (Yaakov vs. Esav, darkness vs. light)
- Uses repetition to emphasize core messages
- Conversational closings that invite reader participation
- Blends Hebrew terminology naturally with plain English
- Uses metaphors like "vessel," "permeates," "embodiments," "springboard"
- Short, punchy sentences mixed with flowing explanatory passages
"#,
        themes: r#"
- Inner wisdom as divine inheritance
- Finding light that emerges from darkness
- Self-awareness over external seeking
- Emotional healing through faith and wisdom
- Transformation of suffering into growth
- The birthright of consciousness and wisdom
- Practical spirituality for modern struggles
- Resilience, hope, and the power of change
- Mental health integration with Torah wisdom
"#,
        influences: r#"
- Rebbe Nachman of Breslov (Likutey Moharan)
- Rav Kook (Orot)
- Humanistic and existential psychology (Rollo May, Irvin Yalom)
- Brene Brown (vulnerability and imperfection)
- P'nimiyus haTorah (inner dimension of Torah)
"#,
        hebrew_vocabulary: r#"
- Sekhel (wisdom/intelligence) - often "inner sekhel" or "Godly wisdom"
- Hisbodedus (personal prayer/meditation)
- Teshuva (return/repentance)
- Tehillim (Psalms)
- Emunah (faith)
- Simcha (joy/happiness)
- Navi/Nach (Prophets)
- P'nimiyus (inner dimension)
"#,
        transitions: r#"
- "Rebbe Nachman teaches..."
- "Here's the profound truth..."
- "What does this mean for us?"
- "This should be a great source of encouragement..."
- "Not only... more importantly..."
- "Let us take the first step..."
- "And then let the journey begin..."
- "The ramifications of this..."
"#,
    };

    /// 返回去除首尾空白后的全部字段副本
    pub fn trimmed(&self) -> VoiceProfile {
        VoiceProfile {
            name: self.name.trim(),
            tone: self.tone.trim(),
            style_patterns: self.style_patterns.trim(),
            themes: self.themes.trim(),
            influences: self.influences.trim(),
            hebrew_vocabulary: self.hebrew_vocabulary.trim(),
            transitions: self.transitions.trim(),
        }
    }

    /// 按展示顺序列出 (标签, 内容)
    pub fn sections(&self) -> [(&'static str, &'static str); 6] {
        [
            ("Tone", self.tone),
            ("Style Patterns", self.style_patterns),
            ("Themes", self.themes),
            ("Influences", self.influences),
            ("Hebrew Vocabulary", self.hebrew_vocabulary),
            ("Common Transitions", self.transitions),
        ]
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::SHAYA_SUSSMAN
    }
}
