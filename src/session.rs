use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer, cookie::SameSite};

use crate::{AppResult, outcome::Outcome};

pub const FLASH: &str = "flash";

pub fn layer(idle_minutes: i64) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(idle_minutes)))
}

/// Queues a message for the next page render.
pub async fn flash(session: &Session, outcome: Outcome) -> AppResult<()> {
    let mut pending = session.get::<Vec<Outcome>>(FLASH).await?.unwrap_or_default();
    pending.push(outcome);
    session.insert(FLASH, pending).await?;
    Ok(())
}

/// Drains the queued messages; each one is shown exactly once.
pub async fn take_flashes(session: &Session) -> AppResult<Vec<Outcome>> {
    Ok(session.remove::<Vec<Outcome>>(FLASH).await?.unwrap_or_default())
}
