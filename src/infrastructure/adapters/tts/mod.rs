//! TTS Adapter - MiniMax HTTP 客户端实现

mod fake_tts_client;
mod minimax_tts_client;

pub use fake_tts_client::FakeTtsClient;
pub use minimax_tts_client::*;
