use crate::application::services::IconLookup;
use crate::domain::Icon;

/// Built-in icon table with a terminal glyph per icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIconSet;

impl StaticIconSet {
    pub fn glyph(icon: Icon) -> &'static str {
        match icon {
            Icon::Rocket => "🚀",
            Icon::Building2 => "🏢",
            Icon::Shield => "🛡",
            Icon::Palette => "🎨",
            Icon::Globe => "🌐",
            Icon::Users => "👥",
            Icon::FileText => "📄",
            Icon::CheckCircle => "✅",
            Icon::PenTool => "🖊",
            Icon::Calculator => "🧮",
            Icon::TrendingUp => "📈",
            Icon::Truck => "🚚",
            Icon::Award => "🏆",
            Icon::Gavel => "⚖",
            Icon::BarChart => "📊",
            Icon::Search => "🔍",
            Icon::DollarSign => "💲",
            Icon::Target => "🎯",
            Icon::LineChart => "📉",
        }
    }
}

impl IconLookup for StaticIconSet {
    fn resolve(&self, name: &str) -> Option<Icon> {
        Icon::from_name(name)
    }

    fn symbol(&self, name: &str) -> Option<&'static str> {
        self.resolve(name).map(Self::glyph)
    }
}
