//! Voice Context - 写作人设
//!
//! 职责:
//! - 提供不可变的人设文本块（语气、风格、主题、影响、词汇、过渡语）

mod profile;

pub use profile::VoiceProfile;
