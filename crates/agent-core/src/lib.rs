//! # agent-core
//!
//! Core agent logic with provider-agnostic LLM abstraction and extensible tool system.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Agent                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │  Reasoning  │  │    Tools    │  │   LlmProvider       │  │
//! │  │    Loop     │──│   Registry  │──│   (Strategy)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait enables swapping between Ollama, OpenAI, Anthropic,
//! or any other provider without changing agent logic. Tools declare a
//! fault-tolerance policy in their schema; the reasoning loop enforces the
//! per-tool retry budget for tools that surface failures.

pub mod provider;
pub mod tool;
pub mod reasoning;
pub mod message;
pub mod error;

pub use error::{AgentError, Result};
pub use message::{Conversation, Message, Role};
pub use provider::LlmProvider;
pub use reasoning::{Agent, AgentBuilder, AgentConfig};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
