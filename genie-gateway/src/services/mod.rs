pub mod databricks;
pub mod genie;

pub use databricks::{DatabricksClient, DatabricksError};
pub use genie::{AgentBricksManager, DatabricksManagerFactory, GenieSpaces, ManagerFactory};
