pub struct Icons;

impl Icons {
    pub const COMET: &str = "☄️";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const STATS: &str = "📊";
    pub const TARGET: &str = "🎯";
    pub const DISTANT: &str = "🌌";
}
