pub struct Icons;

impl Icons {
    pub const BLOCK: &str = "📦";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const LINK: &str = "🔗";
}
