use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Channel, ChannelDraft, CreateUserRequest, Playlist, User};
use crate::services::m3u_parser::IdSource;
use crate::services::m3u_writer::write_m3u;
use crate::services::users::UserRegistry;
use crate::services::xtream::{convert_channels, XtreamChannel, XtreamCredentials};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("channel not found: {0}")]
    ChannelNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("{}", .0.join("; "))]
    InvalidUser(Vec<String>),
}

/// State of one editing session: the playlist being edited, the credentials
/// issued for it and the users created against it.
#[derive(Debug, Default)]
pub struct EditorSession {
    playlist: Playlist,
    credentials: Option<XtreamCredentials>,
    users: UserRegistry,
}

impl EditorSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            playlist: Playlist::new(name),
            ..Default::default()
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn credentials(&self) -> Option<&XtreamCredentials> {
        self.credentials.as_ref()
    }

    pub fn users(&self) -> &[User] {
        self.users.list()
    }

    /// Apply a transformation to the owned playlist
    fn update<F: FnOnce(Playlist) -> Playlist>(&mut self, f: F) {
        let playlist = std::mem::take(&mut self.playlist);
        self.playlist = f(playlist);
    }

    /// Replace all channels with a freshly imported set.
    /// Credentials are reissued for every load.
    pub fn load(&mut self, channels: Vec<Channel>, credentials: XtreamCredentials) {
        self.update(|p| p.with_channels(channels));
        self.credentials = Some(credentials);
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|p| p.with_name(name));
    }

    /// Save an edit form.
    ///
    /// An empty id appends the channel under a fresh id; otherwise the channel
    /// with that id is replaced in place.
    pub fn save_channel<I: IdSource + ?Sized>(
        &mut self,
        draft: ChannelDraft,
        ids: &mut I,
    ) -> Result<Channel, SessionError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(SessionError::MissingFields(missing));
        }

        if draft.id.is_empty() {
            let channel = draft.into_channel(ids.next_id());
            let saved = channel.clone();
            self.update(|p| p.with_appended(channel));
            return Ok(saved);
        }

        if !self.playlist.contains(&draft.id) {
            return Err(SessionError::ChannelNotFound(draft.id));
        }

        let id = draft.id.clone();
        let channel = draft.into_channel(id);
        let saved = channel.clone();
        self.update(|p| p.with_replaced(channel));
        Ok(saved)
    }

    pub fn delete_channel(&mut self, id: &str) -> Result<(), SessionError> {
        if !self.playlist.contains(id) {
            return Err(SessionError::ChannelNotFound(id.to_string()));
        }
        self.update(|p| p.without(id));
        Ok(())
    }

    /// Current playlist as M3U text
    pub fn export(&self) -> String {
        write_m3u(&self.playlist)
    }

    /// Channels re-addressed under the issued credentials
    pub fn xtream_channels(&self) -> Option<Vec<XtreamChannel>> {
        self.credentials
            .as_ref()
            .map(|creds| convert_channels(&self.playlist.channels, creds))
    }

    pub fn create_user(&mut self, request: CreateUserRequest, now: DateTime<Utc>) -> Result<User, SessionError> {
        self.users.create(request, now).map_err(SessionError::InvalidUser)
    }

    pub fn delete_user(&mut self, id: &str) -> Result<User, SessionError> {
        self.users
            .delete(id)
            .ok_or_else(|| SessionError::UserNotFound(id.to_string()))
    }
}
