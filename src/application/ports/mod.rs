//! Application Ports - 出站端口定义

mod tts_engine;

pub use tts_engine::{
    SynthesisAudio, SynthesisRequest, TtsEnginePort, TtsError, API_ERROR, PROCESSING_ERROR,
};
