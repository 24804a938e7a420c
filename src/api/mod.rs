mod client;

pub use client::{
    ChatClient, ChatError, ChatReply, NETWORK_ERROR_TEXT, NO_REPLY_PLACEHOLDER,
    SERVER_ERROR_FALLBACK, bot_text,
};
