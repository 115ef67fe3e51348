//! Module configuration dispatch and view-state engine.
//!
//! Given a module id the engine resolves its configuration document, tracks
//! the active tab, derives the working dataset and hands back the module's
//! extra content and entry form. It knows nothing about any module's
//! business rules and nothing about the UI framework that paints the result:
//! renderers are generic over the view type `V`.
//!
//! ```rust,ignore
//! let engine = ModuleEngine::<String>::builtin()?;
//! let data = InMemoryDataLayer::with_mock_data()?;
//! let mut machine = ViewStateMachine::new();
//!
//! machine.navigate("inventory".into());
//! engine.settle(&mut machine);
//! if let LoaderOutput::Ready(contract) = engine.render(machine.state(), &data) {
//!     println!("{} rows on tab {}", contract.dataset.len(), contract.tab);
//! }
//! ```

pub mod config_registry;
pub mod data_layer;
pub mod data_source;
pub mod engine;
pub mod entry_form;
pub mod error;
pub mod extra_content;
pub mod module_id;
pub mod settings;
pub mod sub_view;
pub mod view_state;

pub use config_registry::ConfigRegistry;
pub use data_layer::InMemoryDataLayer;
pub use data_source::{resolve_dataset, DataSource};
pub use engine::{LoaderOutput, ModuleCapabilities, ModuleEngine, RenderContract};
pub use entry_form::{CloseHandle, EntryFormDescriptor};
pub use error::{DataLayerError, ModuleLoaderError};
pub use extra_content::{ExtraContentRenderer, ExtraContext, TabSetter};
pub use module_id::ModuleId;
pub use settings::{DatasetStrategy, ModuleSettings, ModuleSettingsSet, SubViewRule};
pub use view_state::{ViewEvent, ViewState, ViewStateMachine};
