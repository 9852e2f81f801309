//! Background video playback with the muted-autoplay fallback.

use crate::config::AutoplayPolicy;
use log::{debug, info, warn};
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Autoplay with sound was blocked")]
    AutoplayBlocked,

    #[error("Media file not found: {0}")]
    Missing(String),

    #[error("Media I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A playable media element. Playback may be refused.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MediaElement: Send {
    fn set_muted(&mut self, muted: bool);

    async fn play(&mut self) -> Result<(), MediaError>;
}

/// Outcome of an autoplay attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing { muted: bool },
    /// Nothing plays; the backdrop stays static.
    Failed,
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing { .. })
    }
}

/// Starts playback. If the first attempt is refused, retries exactly once
/// muted. A second refusal is logged and leaves the element stopped.
pub async fn autoplay<M>(element: &mut M, muted: bool) -> Playback
where
    M: MediaElement + ?Sized,
{
    element.set_muted(muted);
    match element.play().await {
        Ok(()) => {
            info!("Background video playing (muted: {})", muted);
            return Playback::Playing { muted };
        }
        Err(e) => debug!("Autoplay refused: {}, retrying muted", e),
    }

    element.set_muted(true);
    match element.play().await {
        Ok(()) => {
            info!("Background video playing muted");
            Playback::Playing { muted: true }
        }
        Err(e) => {
            warn!("Background video could not start: {}", e);
            Playback::Failed
        }
    }
}

/// Background loop backed by a file on disk. Frames are never decoded; the
/// terminal shows a tinted backdrop while it "plays".
#[derive(Debug, Clone)]
pub struct TerminalVideo {
    path: PathBuf,
    muted: bool,
    policy: AutoplayPolicy,
    playing: bool,
}

impl TerminalVideo {
    pub fn new(path: impl Into<PathBuf>, policy: AutoplayPolicy) -> Self {
        Self {
            path: path.into(),
            muted: false,
            policy,
            playing: false,
        }
    }
}

#[async_trait::async_trait]
impl MediaElement for TerminalVideo {
    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    async fn play(&mut self) -> Result<(), MediaError> {
        if self.playing {
            return Ok(());
        }
        if !self.muted && self.policy == AutoplayPolicy::RequireMuted {
            return Err(MediaError::AutoplayBlocked);
        }
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => {
                self.playing = true;
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MediaError::Missing(self.path.display().to_string()))
            }
            Err(e) => Err(MediaError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn plays_unmuted_when_allowed() {
        let mut element = MockMediaElement::new();
        element
            .expect_set_muted()
            .with(eq(false))
            .times(1)
            .return_const(());
        element.expect_play().times(1).returning(|| Ok(()));

        assert_eq!(
            autoplay(&mut element, false).await,
            Playback::Playing { muted: false }
        );
    }

    #[tokio::test]
    async fn refused_playback_retries_once_muted() {
        let mut element = MockMediaElement::new();
        element
            .expect_set_muted()
            .with(eq(false))
            .times(1)
            .return_const(());
        element
            .expect_set_muted()
            .with(eq(true))
            .times(1)
            .return_const(());
        let mut attempts = 0;
        element.expect_play().times(2).returning(move || {
            attempts += 1;
            if attempts == 1 {
                Err(MediaError::AutoplayBlocked)
            } else {
                Ok(())
            }
        });

        assert_eq!(
            autoplay(&mut element, false).await,
            Playback::Playing { muted: true }
        );
    }

    #[tokio::test]
    async fn second_refusal_gives_up() {
        let mut element = MockMediaElement::new();
        element.expect_set_muted().times(2).return_const(());
        element
            .expect_play()
            .times(2)
            .returning(|| Err(MediaError::AutoplayBlocked));

        assert_eq!(autoplay(&mut element, false).await, Playback::Failed);
    }

    #[tokio::test]
    async fn terminal_video_needs_mute_under_strict_policy() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut video = TerminalVideo::new(file.path(), AutoplayPolicy::RequireMuted);

        assert_eq!(
            autoplay(&mut video, false).await,
            Playback::Playing { muted: true }
        );
        assert!(video.playing);
        assert!(video.muted);
    }

    #[tokio::test]
    async fn playing_video_does_not_touch_the_file_again() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        let mut video = TerminalVideo::new(&path, AutoplayPolicy::Allow);
        video.play().await.unwrap();

        drop(file);
        assert!(!path.exists());
        assert!(video.play().await.is_ok());
    }

    #[tokio::test]
    async fn missing_file_fails_both_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let mut video = TerminalVideo::new(dir.path().join("gone.mp4"), AutoplayPolicy::Allow);

        assert!(matches!(video.play().await, Err(MediaError::Missing(_))));
        assert_eq!(autoplay(&mut video, true).await, Playback::Failed);
        assert!(!video.playing);
    }
}
