//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, SessionState};
use tracing::debug;

use super::{UpdateAction, UpdateResult};

/// Process a message and update the session state
/// Returns the action the HTTP layer should take, if any
pub fn update(app: &AppState, session: &mut SessionState, message: Message) -> UpdateResult {
    match message {
        Message::Navigate(id) => {
            if app.registry.navigate_to(&mut session.navigation, &id) {
                UpdateResult::action(UpdateAction::SyncUrl(session.navigation.url().clone()))
            } else {
                UpdateResult::none()
            }
        }

        Message::SetForceMobile(enabled) => {
            if session.navigation.mobile_override() == enabled {
                return UpdateResult::none();
            }
            debug!("Debug mobile override set to {}", enabled);
            session.navigation.set_mobile_override(enabled);
            UpdateResult::action(UpdateAction::SyncUrl(session.navigation.canonical_url()))
        }

        Message::DismissMobileHint => {
            if session.hint_seen {
                return UpdateResult::none();
            }
            session.hint_seen = true;
            UpdateResult::action(UpdateAction::PersistSession(session.flags()))
        }
    }
}
