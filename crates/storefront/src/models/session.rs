//! Session-related types.
//!
//! Each visitor's [`ShopState`] (search query, cart, current view) is stored
//! in their session under [`keys::SHOP_STATE`].

use shirt_store_core::ShopState;
use tower_sessions::Session;

/// Session keys for shopper data.
pub mod keys {
    /// Key for the visitor's query, cart, and view.
    pub const SHOP_STATE: &str = "shop_state";
}

/// Load the shopper's state, starting fresh if the session has none.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value can't be decoded.
pub async fn load_shop_state(session: &Session) -> Result<ShopState, tower_sessions::session::Error> {
    Ok(session
        .get::<ShopState>(keys::SHOP_STATE)
        .await?
        .unwrap_or_default())
}

/// Apply `action` to the shopper's state and write it back.
///
/// Returns the post-action snapshot.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn update_shop_state<F>(
    session: &Session,
    action: F,
) -> Result<ShopState, tower_sessions::session::Error>
where
    F: FnOnce(&mut ShopState) + Send,
{
    let mut state = load_shop_state(session).await?;
    action(&mut state);
    session.insert(keys::SHOP_STATE, &state).await?;
    Ok(state)
}
