// SPDX-License-Identifier: MPL-2.0
//! Voice input.
//!
//! Speech-to-text is an external capability behind the [`SpeechRecognizer`]
//! port. Recognizers report back through [`SpeechEvent`]s, which the app feeds
//! into [`VoiceInput::handle_event`]. Without a platform recognizer the app
//! uses [`UnsupportedRecognizer`] and the voice button stays disabled.

use crate::i18n::I18n;
use std::fmt;
use thiserror::Error;

/// Classified recognizer failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("no microphone found")]
    NoMicrophone,
    #[error("microphone access denied")]
    PermissionDenied,
    #[error("speech recognition is not supported")]
    Unsupported,
    #[error("speech recognition error: {0}")]
    Other(String),
}

impl SpeechError {
    /// Maps a raw recognizer error code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => SpeechError::NoSpeech,
            "audio-capture" => SpeechError::NoMicrophone,
            "not-allowed" => SpeechError::PermissionDenied,
            "not-supported" => SpeechError::Unsupported,
            other => SpeechError::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SpeechError::NoSpeech => "speech-error-no-speech",
            SpeechError::NoMicrophone => "speech-error-no-microphone",
            SpeechError::PermissionDenied => "speech-error-permission-denied",
            SpeechError::Unsupported => "speech-error-unsupported",
            SpeechError::Other(_) => "speech-error-other",
        }
    }

    /// Localized text for the footer error line.
    #[must_use]
    pub fn user_message(&self, i18n: &I18n) -> String {
        match self {
            SpeechError::Other(code) => i18n.tr_with_args(self.i18n_key(), &[("code", code)]),
            _ => i18n.tr(self.i18n_key()),
        }
    }
}

/// Notification from a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Final text of one utterance.
    Transcript(String),
    Error(SpeechError),
    ListeningChanged(bool),
}

/// Speech-to-text engine.
pub trait SpeechRecognizer: Send {
    fn is_supported(&self) -> bool;

    /// Starts listening for one utterance.
    fn start(&mut self) -> Result<(), SpeechError>;

    fn stop(&mut self);
}

/// Recognizer for platforms without speech-to-text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) {}
}

/// Listening state and last error of the voice button.
pub struct VoiceInput {
    recognizer: Box<dyn SpeechRecognizer>,
    listening: bool,
    error: Option<SpeechError>,
}

impl fmt::Debug for VoiceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceInput")
            .field("supported", &self.recognizer.is_supported())
            .field("listening", &self.listening)
            .field("error", &self.error)
            .finish()
    }
}

impl Default for VoiceInput {
    fn default() -> Self {
        Self::new(Box::new(UnsupportedRecognizer))
    }
}

impl VoiceInput {
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            listening: false,
            error: None,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_supported()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn error(&self) -> Option<&SpeechError> {
        self.error.as_ref()
    }

    pub fn toggle(&mut self) {
        if self.listening {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn start(&mut self) {
        if self.listening {
            return;
        }
        if !self.recognizer.is_supported() {
            self.error = Some(SpeechError::Unsupported);
            return;
        }

        self.error = None;
        match self.recognizer.start() {
            Ok(()) => self.listening = true,
            Err(err) => {
                log::warn!("Voice input failed to start: {err}");
                self.error = Some(err);
            }
        }
    }

    pub fn stop(&mut self) {
        if self.listening {
            self.recognizer.stop();
            self.listening = false;
        }
    }

    /// Applies a recognizer event. Returns the transcript to insert, if any.
    pub fn handle_event(&mut self, event: SpeechEvent) -> Option<String> {
        match event {
            SpeechEvent::Transcript(text) => Some(text),
            SpeechEvent::Error(err) => {
                log::warn!("Voice input error: {err}");
                self.error = Some(err);
                self.listening = false;
                None
            }
            SpeechEvent::ListeningChanged(listening) => {
                self.listening = listening;
                None
            }
        }
    }
}

/// Appends a recognized transcript to the text already typed.
#[must_use]
pub fn append_transcript(input: &str, transcript: &str) -> String {
    let mut combined = String::with_capacity(input.len() + transcript.len());
    combined.push_str(input);
    combined.push_str(transcript);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Recognizer that counts calls and optionally fails to start.
    #[derive(Default)]
    struct FakeRecognizer {
        starts: Arc<AtomicUsize>,
        stops: Arc<AtomicUsize>,
        start_error: Option<SpeechError>,
    }

    impl SpeechRecognizer for FakeRecognizer {
        fn is_supported(&self) -> bool {
            true
        }

        fn start(&mut self) -> Result<(), SpeechError> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            match &self.start_error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn codes_map_to_classified_errors() {
        assert_eq!(SpeechError::from_code("no-speech"), SpeechError::NoSpeech);
        assert_eq!(SpeechError::from_code("audio-capture"), SpeechError::NoMicrophone);
        assert_eq!(SpeechError::from_code("not-allowed"), SpeechError::PermissionDenied);
        assert_eq!(SpeechError::from_code("not-supported"), SpeechError::Unsupported);
        assert_eq!(
            SpeechError::from_code("network"),
            SpeechError::Other("network".into())
        );
    }

    #[test]
    fn errors_have_localized_text() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(SpeechError::NoSpeech.user_message(&i18n), "No speech detected.");
        assert_eq!(
            SpeechError::PermissionDenied.user_message(&i18n),
            "Microphone access denied."
        );
        assert_eq!(
            SpeechError::Other("network".into()).user_message(&i18n),
            "Error: network"
        );
    }

    #[test]
    fn unsupported_recognizer_reports_error_on_start() {
        let mut voice = VoiceInput::default();
        assert!(!voice.is_supported());

        voice.toggle();
        assert!(!voice.is_listening());
        assert_eq!(voice.error(), Some(&SpeechError::Unsupported));
    }

    #[test]
    fn toggle_starts_and_stops_recognizer() {
        let recognizer = FakeRecognizer::default();
        let starts = recognizer.starts.clone();
        let stops = recognizer.stops.clone();
        let mut voice = VoiceInput::new(Box::new(recognizer));

        voice.toggle();
        assert!(voice.is_listening());
        voice.toggle();
        assert!(!voice.is_listening());

        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_start_records_error() {
        let recognizer = FakeRecognizer {
            start_error: Some(SpeechError::NoMicrophone),
            ..FakeRecognizer::default()
        };
        let mut voice = VoiceInput::new(Box::new(recognizer));

        voice.start();
        assert!(!voice.is_listening());
        assert_eq!(voice.error(), Some(&SpeechError::NoMicrophone));
    }

    #[test]
    fn error_event_stops_listening() {
        let mut voice = VoiceInput::new(Box::new(FakeRecognizer::default()));
        voice.start();

        let transcript = voice.handle_event(SpeechEvent::Error(SpeechError::NoSpeech));
        assert!(transcript.is_none());
        assert!(!voice.is_listening());
        assert_eq!(voice.error(), Some(&SpeechError::NoSpeech));
    }

    #[test]
    fn transcript_event_is_returned() {
        let mut voice = VoiceInput::new(Box::new(FakeRecognizer::default()));
        voice.start();
        assert_eq!(
            voice.handle_event(SpeechEvent::Transcript("hello".into())),
            Some("hello".to_string())
        );
        voice.handle_event(SpeechEvent::ListeningChanged(false));
        assert!(!voice.is_listening());
    }

    #[test]
    fn transcript_is_appended_verbatim() {
        assert_eq!(append_transcript("Hi ", "there"), "Hi there");
        assert_eq!(append_transcript("", "hello"), "hello");
    }
}
