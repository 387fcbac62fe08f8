//! Service Kit - Agent Tools
//!
//! Domain-specific tools that implement `agent_core::Tool` for the travel
//! assistant. Each wraps one provider: the catalog store, the search client,
//! or the signals client.

mod destination_info;
mod experience_info;
mod get_signals;
mod list_experiences;
mod web_search;

pub use destination_info::DestinationInfoTool;
pub use experience_info::ExperienceInfoTool;
pub use get_signals::SignalsTool;
pub use list_experiences::AllExperiencesTool;
pub use web_search::WebSearchTool;
