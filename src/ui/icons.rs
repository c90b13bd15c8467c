pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const STATS: &str = "📊";
    pub const GLOBE: &str = "🌍";
    pub const BOOK: &str = "📚";
    pub const GEAR: &str = "⚙️";
}
