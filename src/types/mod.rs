//! 类型模块：聊天补全接口的请求、响应与消息类型。
//!
//! # Types Module
//!
//! Wire types for the chat-completion endpoint.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and text content |
//! | [`ChatOptions`] | Per-call sampling overrides |
//! | [`ChatCompletionRequest`] | Outbound JSON body |
//! | [`ChatCompletionResponse`] | Inbound JSON body; only the first choice is consumed |

pub mod completion;
pub mod message;

pub use completion::{
    ChatCompletionRequest, ChatCompletionResponse, ChatOptions, Choice, ChoiceMessage, Usage,
};
pub use message::{Message, MessageRole};
