mod hero;
pub use hero::Hero;

mod counters;
pub use counters::StatsCounter;

mod charts;
pub use charts::InteractiveCharts;

mod insights;
pub use insights::KeyInsights;

mod before_after;
pub use before_after::BeforeAfterComparison;

mod comparison;
pub use comparison::ComparisonMode;

mod methodology;
pub use methodology::MethodologySteps;

mod share;
pub use share::ShareButton;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod svg;
