/// The fixed icon set service cards may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Rocket,
    Building2,
    Shield,
    Palette,
    Globe,
    Users,
    FileText,
    CheckCircle,
    PenTool,
    Calculator,
    TrendingUp,
    Truck,
    Award,
    Gavel,
    BarChart,
    Search,
    DollarSign,
    Target,
    LineChart,
}

impl Icon {
    pub const ALL: [Icon; 19] = [
        Icon::Rocket,
        Icon::Building2,
        Icon::Shield,
        Icon::Palette,
        Icon::Globe,
        Icon::Users,
        Icon::FileText,
        Icon::CheckCircle,
        Icon::PenTool,
        Icon::Calculator,
        Icon::TrendingUp,
        Icon::Truck,
        Icon::Award,
        Icon::Gavel,
        Icon::BarChart,
        Icon::Search,
        Icon::DollarSign,
        Icon::Target,
        Icon::LineChart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Rocket => "Rocket",
            Icon::Building2 => "Building2",
            Icon::Shield => "Shield",
            Icon::Palette => "Palette",
            Icon::Globe => "Globe",
            Icon::Users => "Users",
            Icon::FileText => "FileText",
            Icon::CheckCircle => "CheckCircle",
            Icon::PenTool => "PenTool",
            Icon::Calculator => "Calculator",
            Icon::TrendingUp => "TrendingUp",
            Icon::Truck => "Truck",
            Icon::Award => "Award",
            Icon::Gavel => "Gavel",
            Icon::BarChart => "BarChart",
            Icon::Search => "Search",
            Icon::DollarSign => "DollarSign",
            Icon::Target => "Target",
            Icon::LineChart => "LineChart",
        }
    }

    /// Names are matched exactly, the same way the backend stores them.
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }
}
