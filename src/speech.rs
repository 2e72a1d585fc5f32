// src/speech.rs

use crate::model::{Question, SolutionRecord};
use serde::{Deserialize, Serialize};

pub const TEST_SENTENCE: &str =
    "This is a test of the QuestCode voice system. Let's see how it sounds.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    pub rate: f32,
    pub pitch: f32,
    #[serde(default = "default_language")]
    pub language: Option<String>,
}

fn default_language() -> Option<String> {
    Some("en-US".to_string())
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            language: default_language(),
        }
    }
}

/// Salida de voz de la plataforma. Dispara y olvida: sin resultado ni callback.
pub trait SpeechService {
    fn speak(&self, text: &str, options: &SpeechOptions);
}

/// Texto a leer: enunciado y, si hay solución, su enfoque.
pub fn compose_utterance(question: &Question, solution: Option<&SolutionRecord>) -> String {
    let mut text = question.description.trim().to_string();
    if let Some(record) = solution {
        let approach = record.solution.approach.trim();
        if !approach.is_empty() {
            if text.ends_with(['.', '!', '?']) {
                text.push(' ');
            } else if !text.is_empty() {
                text.push_str(". ");
            }
            text.push_str(approach);
        }
    }
    text
}

/// Sin backend de voz: sólo deja constancia en el log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

impl SpeechService for SilentSpeech {
    fn speak(&self, text: &str, _options: &SpeechOptions) {
        log::info!("speech unavailable, skipping {} chars", text.len());
    }
}

/// Lanza `say` (macOS) o `espeak-ng` como proceso hijo sin esperarlo.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for CommandSpeech {
    fn default() -> Self {
        let program = if cfg!(target_os = "macos") { "say" } else { "espeak-ng" };
        Self::with_program(program)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CommandSpeech {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Argumentos para el programa; `rate` y `pitch` son relativos a 1.0.
    pub fn args(&self, text: &str, options: &SpeechOptions) -> Vec<String> {
        let mut args = Vec::new();
        if self.program == "say" {
            // say: palabras por minuto, ~175 por defecto
            args.push("-r".to_string());
            args.push(format!("{}", (175.0 * options.rate).round() as i32));
        } else {
            // espeak: -s palabras/min (175), -p tono 0..99 (50)
            args.push("-s".to_string());
            args.push(format!("{}", (175.0 * options.rate).round() as i32));
            args.push("-p".to_string());
            args.push(format!("{}", (50.0 * options.pitch).clamp(0.0, 99.0).round() as i32));
            if let Some(lang) = &options.language {
                args.push("-v".to_string());
                args.push(lang.to_lowercase());
            }
        }
        args.push(text.to_string());
        args
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SpeechService for CommandSpeech {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        let spawned = std::process::Command::new(&self.program)
            .args(self.args(text, options))
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => log::debug!("{} started (pid {})", self.program, child.id()),
            Err(e) => log::warn!("could not start {}: {e}", self.program),
        }
    }
}

/// Web Speech API del navegador.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct WebSpeech;

#[cfg(target_arch = "wasm32")]
impl SpeechService for WebSpeech {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, speech skipped");
            return;
        };
        let synth = match window.speech_synthesis() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("speechSynthesis unavailable: {e:?}");
                return;
            }
        };
        let utterance = match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("could not build utterance: {e:?}");
                return;
            }
        };
        utterance.set_rate(options.rate);
        utterance.set_pitch(options.pitch);
        if let Some(lang) = &options.language {
            utterance.set_lang(lang);
        }
        synth.speak(&utterance);
    }
}

/// Backend por defecto de la plataforma actual.
pub fn platform_speech() -> Box<dyn SpeechService> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WebSpeech)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(CommandSpeech::default())
    }
}
