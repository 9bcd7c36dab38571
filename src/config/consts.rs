// src/config/consts.rs

// Sources (fetch order = merge order; later wins)
pub const TALKPAL_URL: &str =
    "https://talkpal.ai/vocabulary/top-10-vietnamese-gen-z-slang-terms-you-need-to-know/";
pub const LEARNVN_URL: &str =
    "https://learningvietnamese.edu.vn/blog/speak-vietnamese/vietnamese-slang-words/?lang=en";

// Net config
pub const USER_AGENT: &str = concat!("vn_slang/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Local store
pub const STORE_DIR: &str = ".store";
pub const DICT_FILE: &str = "slang_dict.json";
pub const LOG_FILE: &str = "debug.log";
pub const JSON_INDENT: &[u8] = b"    ";

// Translation model (vi → en, fixed pair)
pub const MODEL_ID: &str = "Helsinki-NLP/opus-mt-vi-en";
pub const INFERENCE_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models";
pub const TOKEN_ENV: &str = "HF_TOKEN";
pub const WARMUP_TEXT: &str = "xin chào";
