use crate::error::ClipboardError;
use crate::utils::memo::Memo;
use async_trait::async_trait;
use log::info;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

pub trait Notifier: Send + Sync {
    /// Shows a transient success message.
    fn success(&self, message: &str);
}

/// The interaction that triggered a copy.
pub trait CopyEvent {
    fn prevent_default(&mut self);
    fn stop_propagation(&mut self);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl CopyEvent for ClickEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOptions {
    pub copy_success_message: String,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            copy_success_message: "Copied".to_string(),
        }
    }
}

pub struct CopyToClipboard {
    text: String,
    options: CopyOptions,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

impl CopyToClipboard {
    pub fn new(
        text: &str,
        options: CopyOptions,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            text: text.to_string(),
            options,
            clipboard,
            notifier,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub async fn handle<E: CopyEvent + ?Sized>(&self, event: &mut E) {
        event.prevent_default();
        event.stop_propagation();

        match self.clipboard.write_text(&self.text).await {
            Ok(()) => self.notifier.success(&self.options.copy_success_message),
            // Copy failures are not actionable for the user.
            Err(_) => {}
        }
    }
}

/// Hands out the same handler for as long as text and message stay the same.
pub struct CopyHandlerCache {
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    memo: Memo<(String, String), Arc<CopyToClipboard>>,
}

impl CopyHandlerCache {
    pub fn new(clipboard: Arc<dyn Clipboard>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clipboard,
            notifier,
            memo: Memo::new(),
        }
    }

    pub fn handler(&mut self, text: &str, options: &CopyOptions) -> Arc<CopyToClipboard> {
        let key = (text.to_string(), options.copy_success_message.clone());
        let clipboard = Arc::clone(&self.clipboard);
        let notifier = Arc::clone(&self.notifier);
        let handler = self.memo.get_or_compute(key, || {
            Arc::new(CopyToClipboard::new(
                text,
                options.clone(),
                clipboard,
                notifier,
            ))
        });
        Arc::clone(handler)
    }
}

/// Pipes the text into an external command such as `pbcopy`.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Spawn(self.program.clone(), e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit(status.code().unwrap_or(-1)))
        }
    }
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        writes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(ClipboardError::Write("permission denied".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn setup(fail: bool) -> (Arc<FakeClipboard>, Arc<RecordingNotifier>) {
        (
            Arc::new(FakeClipboard {
                fail,
                ..Default::default()
            }),
            Arc::new(RecordingNotifier::default()),
        )
    }

    #[tokio::test]
    async fn copies_and_notifies_with_default_message() {
        let (clipboard, notifier) = setup(false);
        let handler = CopyToClipboard::new(
            "abc",
            CopyOptions::default(),
            clipboard.clone(),
            notifier.clone(),
        );
        let mut event = ClickEvent::default();

        handler.handle(&mut event).await;

        assert!(event.default_prevented);
        assert!(event.propagation_stopped);
        assert_eq!(*clipboard.writes.lock().unwrap(), vec!["abc".to_string()]);
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec!["Copied".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_write_shows_nothing() {
        let (clipboard, notifier) = setup(true);
        let handler = CopyToClipboard::new(
            "abc",
            CopyOptions::default(),
            clipboard.clone(),
            notifier.clone(),
        );
        let mut event = ClickEvent::default();

        handler.handle(&mut event).await;

        assert!(event.default_prevented);
        assert_eq!(clipboard.writes.lock().unwrap().len(), 1);
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn custom_message_is_shown_verbatim() {
        let (clipboard, notifier) = setup(false);
        let options = CopyOptions {
            copy_success_message: "Address copied".to_string(),
        };
        let handler = CopyToClipboard::new("0xabc", options, clipboard, notifier.clone());

        handler.handle(&mut ClickEvent::default()).await;

        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec!["Address copied".to_string()]
        );
    }

    #[test]
    fn cached_handler_is_stable_until_inputs_change() {
        let (clipboard, notifier) = setup(false);
        let mut cache = CopyHandlerCache::new(clipboard, notifier);
        let defaults = CopyOptions::default();

        let first = cache.handler("abc", &defaults);
        let again = cache.handler("abc", &defaults);
        assert!(Arc::ptr_eq(&first, &again));

        let other_text = cache.handler("xyz", &defaults);
        assert!(!Arc::ptr_eq(&first, &other_text));
        assert_eq!(other_text.text(), "xyz");

        let other_message = cache.handler(
            "xyz",
            &CopyOptions {
                copy_success_message: "Address copied".to_string(),
            },
        );
        assert!(!Arc::ptr_eq(&other_text, &other_message));
    }

    #[test]
    fn splits_command_line() {
        let clipboard = CommandClipboard::new("xclip -selection clipboard");
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn command_clipboard_reports_outcome() {
        assert_eq!(CommandClipboard::new("cat").write_text("abc").await, Ok(()));

        assert!(matches!(
            CommandClipboard::new("definitely-not-a-clipboard-tool")
                .write_text("abc")
                .await,
            Err(ClipboardError::Spawn(..))
        ));
    }
}
