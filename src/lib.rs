//! Restaurant finder: a conversational agent that finds restaurants and
//! helps book tables.
//!
//! The agent is a system instruction plus one tool, `get_restaurants`, driven
//! by a [`Runner`](runner::Runner) that loops between a model provider and the
//! tool and records every step in an in-memory session.
//! [`RestaurantAgent::stream`](agent::RestaurantAgent::stream) relays those
//! steps to the caller as progress updates followed by a final answer.
//!
//! # Quick Start
//!
//! ```no_run
//! use futures::StreamExt;
//! use restaurant_finder::prelude::*;
//!
//! # async fn example() -> restaurant_finder::error::Result<()> {
//! let config = FinderConfig::from_env();
//! let agent = RestaurantAgent::new(&config)?;
//! let mut responses = agent.stream("Top 3 Chinese restaurants in New York", "session-1");
//! while let Some(response) = responses.next().await {
//!     match response? {
//!         AgentResponse::Progress { updates } => eprintln!("{updates}"),
//!         AgentResponse::Final { content } => println!("{content}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod a2ui;
pub mod agent;
pub mod config;
pub mod error;
pub mod models;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod runner;
pub mod session;
pub mod tools;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
