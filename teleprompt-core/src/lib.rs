pub mod dossier;
pub mod engine;
pub mod nav;
pub mod prefs;
pub mod reveal;
pub mod sched;
pub mod sink;
pub mod theme;

// Re-export the main struct so users can just use `teleprompt_core::PortfolioEngine`
pub use engine::{PortfolioEngine, SYSTEM_ERROR};

// Re-export the reveal engine surface for callers that drive it directly
pub use reveal::{DEFAULT_STEP_DELAY, Player, RevealError, validate_markup};
pub use sched::{ManualScheduler, ScheduleHandle, Scheduler, Task, TokioScheduler};
pub use sink::{BufferSink, RenderSink};
pub use theme::{THEME_KEY, Theme, ThemeSwitch};
