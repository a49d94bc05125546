//! Session state for the coin game.
//! The reducer is pure; the `App` component turns its flags into timers and
//! network calls.

use std::rc::Rc;
use yew::Reducible;

use crate::api::{ClaimStatus, SubmitRequest};

/// Clicks needed to unlock the dashboard.
pub const CLICKS_TO_UNLOCK: u32 = 5;
pub const PARTICLE_LIFETIME_MS: u32 = 800;
/// Lets the last coin flip finish before the dashboard replaces the game.
pub const UNLOCK_DELAY_MS: u32 = 500;
pub const COIN_ANIMATION_MS: u32 = 600;
pub const COPIED_FLAG_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// A submit the controller still has to send. `seq` makes repeated counts distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncTicket {
    pub seq: u64,
    pub request: SubmitRequest,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub click_count: u32,
    pub unlocked: bool,
    pub wallet_address: Option<String>,
    pub connected: bool,
    /// Live particles in insertion order.
    pub particles: Vec<Particle>,
    /// Click whose coin animation is still playing.
    pub animating_click: Option<u64>,
    /// Threshold reached, waiting for `Unlock`.
    pub unlock_pending: bool,
    /// Latest submit to send.
    pub sync: Option<SyncTicket>,
    sync_seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    WalletConnected { address: String },
    RemoteLoaded { address: String, status: ClaimStatus },
    WalletDisconnected,
    CoinClick { id: u64, x: f64, y: f64 },
    ParticleExpired { id: u64 },
    AnimationFinished { id: u64 },
    Unlock,
    PlayAgain,
}

impl Session {
    /// Clicks are accepted only while connected and before the threshold is hit.
    pub fn can_collect(&self) -> bool {
        self.connected && !self.unlocked && !self.unlock_pending
    }

    pub fn is_animating(&self) -> bool {
        self.animating_click.is_some()
    }

    pub fn is_near_unlock(&self) -> bool {
        self.click_count.saturating_add(1) >= CLICKS_TO_UNLOCK
    }

    fn reset(&mut self) {
        *self = Session {
            sync_seq: self.sync_seq,
            ..Default::default()
        };
    }

    fn queue_sync(&mut self, coins_collected: u32) {
        let Some(wallet_address) = self.wallet_address.clone() else {
            return;
        };
        if !self.connected {
            return;
        }
        self.sync_seq += 1;
        self.sync = Some(SyncTicket {
            seq: self.sync_seq,
            request: SubmitRequest {
                wallet_address,
                coins_collected,
            },
        });
    }

    /// Apply one action in place. Returns false when the action changed nothing.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        use SessionAction::*;
        match action {
            WalletConnected { address } => {
                self.reset();
                self.wallet_address = Some(address);
                self.connected = true;
            }
            RemoteLoaded { address, status } => {
                if !self.connected || self.wallet_address.as_deref() != Some(address.as_str()) {
                    log::debug!("dropping stale game state for {}", address);
                    return false;
                }
                if !status.exists {
                    return false;
                }
                // Local clicks made before the load resolved were already submitted.
                self.click_count = self.click_count.max(status.coins_collected);
                if status.completed || status.coins_collected >= CLICKS_TO_UNLOCK {
                    self.click_count = self.click_count.max(CLICKS_TO_UNLOCK);
                    self.unlocked = true;
                    self.unlock_pending = false;
                    self.animating_click = None;
                    self.particles.clear();
                } else if self.click_count < CLICKS_TO_UNLOCK {
                    self.unlock_pending = false;
                }
            }
            WalletDisconnected => {
                let mut cleared = self.clone();
                cleared.reset();
                if *self == cleared {
                    return false;
                }
                *self = cleared;
            }
            CoinClick { id, x, y } => {
                if !self.can_collect() {
                    return false;
                }
                self.particles.push(Particle { id, x, y });
                self.click_count = self.click_count.saturating_add(1);
                self.animating_click = Some(id);
                self.queue_sync(self.click_count);
                if self.click_count >= CLICKS_TO_UNLOCK {
                    self.unlock_pending = true;
                }
            }
            ParticleExpired { id } => {
                let before = self.particles.len();
                self.particles.retain(|p| p.id != id);
                return self.particles.len() != before;
            }
            AnimationFinished { id } => {
                if self.animating_click != Some(id) {
                    return false;
                }
                self.animating_click = None;
            }
            Unlock => {
                if !self.unlock_pending || self.click_count < CLICKS_TO_UNLOCK {
                    return false;
                }
                self.unlock_pending = false;
                self.unlocked = true;
            }
            PlayAgain => {
                self.click_count = 0;
                self.unlocked = false;
                self.unlock_pending = false;
                self.animating_click = None;
                self.particles.clear();
                self.queue_sync(0);
            }
        }
        true
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if !new.apply(action) {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::MemoryStore;
    use crate::api::{load_best_effort, sync_best_effort};

    const WALLET: &str = "0xABC0000000000000000000000000000000000001";

    fn connected() -> Session {
        let mut s = Session::default();
        s.apply(SessionAction::WalletConnected {
            address: WALLET.into(),
        });
        s
    }

    fn click(s: &mut Session, id: u64) -> bool {
        s.apply(SessionAction::CoinClick {
            id,
            x: 100.0,
            y: 200.0,
        })
    }

    fn progress(s: &Session) -> (u32, bool, bool) {
        (s.click_count, s.unlocked, s.unlock_pending)
    }

    #[test]
    fn clicks_below_threshold_never_unlock() {
        for n in 0..CLICKS_TO_UNLOCK {
            let mut s = connected();
            for id in 0..n as u64 {
                assert!(click(&mut s, id));
            }
            assert_eq!(s.click_count, n);
            assert!(!s.unlocked);
            assert!(!s.unlock_pending);
            assert!(!s.apply(SessionAction::Unlock));
            assert!(!s.unlocked);
        }
    }

    #[test]
    fn clicks_are_ignored_while_disconnected() {
        let mut s = Session::default();
        assert!(!click(&mut s, 1));
        assert_eq!(s, Session::default());
        assert!(s.sync.is_none());
    }

    #[test]
    fn threshold_click_unlocks_exactly_once() {
        let mut s = connected();
        for id in 1..=CLICKS_TO_UNLOCK as u64 {
            click(&mut s, id);
        }
        assert!(s.unlock_pending);
        assert!(!s.unlocked);
        // clicks during the unlock delay do not count
        assert!(!click(&mut s, 99));
        assert_eq!(s.click_count, CLICKS_TO_UNLOCK);

        assert!(s.apply(SessionAction::Unlock));
        assert!(s.unlocked);
        assert!(!s.apply(SessionAction::Unlock));
        assert!(!click(&mut s, 100));
        assert_eq!(s.click_count, CLICKS_TO_UNLOCK);
    }

    #[test]
    fn each_click_queues_full_count() {
        let mut s = connected();
        click(&mut s, 1);
        let first = s.sync.clone().unwrap();
        click(&mut s, 2);
        let second = s.sync.clone().unwrap();
        assert_eq!(first.request.coins_collected, 1);
        assert_eq!(second.request.coins_collected, 2);
        assert_eq!(second.request.wallet_address, WALLET);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn particles_expire_by_id() {
        let mut s = connected();
        click(&mut s, 1);
        click(&mut s, 2);
        assert_eq!(s.particles.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(s.apply(SessionAction::ParticleExpired { id: 1 }));
        assert_eq!(s.particles.len(), 1);
        assert!(!s.apply(SessionAction::ParticleExpired { id: 1 }));
        assert_eq!(s.particles[0], Particle { id: 2, x: 100.0, y: 200.0 });
    }

    #[test]
    fn only_latest_click_clears_animation() {
        let mut s = connected();
        click(&mut s, 1);
        click(&mut s, 2);
        assert!(!s.apply(SessionAction::AnimationFinished { id: 1 }));
        assert!(s.is_animating());
        assert!(s.apply(SessionAction::AnimationFinished { id: 2 }));
        assert!(!s.is_animating());
    }

    #[test]
    fn play_again_resets_from_any_state() {
        let mut fresh = connected();
        fresh.apply(SessionAction::PlayAgain);

        let mut mid = connected();
        click(&mut mid, 1);
        click(&mut mid, 2);
        mid.apply(SessionAction::PlayAgain);

        let mut done = connected();
        for id in 1..=5 {
            click(&mut done, id);
        }
        done.apply(SessionAction::Unlock);
        done.apply(SessionAction::PlayAgain);

        for s in [&fresh, &mid, &done] {
            assert_eq!(progress(s), (0, false, false));
            assert!(s.particles.is_empty());
            assert!(s.connected);
            assert_eq!(s.sync.as_ref().unwrap().request.coins_collected, 0);
        }
    }

    #[test]
    fn play_again_is_idempotent() {
        let mut s = connected();
        click(&mut s, 1);
        s.apply(SessionAction::PlayAgain);
        let once = s.clone();
        s.apply(SessionAction::PlayAgain);
        assert_eq!(progress(&s), progress(&once));
        assert_eq!(s.particles, once.particles);
        assert_eq!(s.wallet_address, once.wallet_address);
        assert_eq!(s.sync.as_ref().unwrap().request, once.sync.as_ref().unwrap().request);
    }

    #[test]
    fn play_again_without_wallet_does_not_sync() {
        let mut s = Session::default();
        s.apply(SessionAction::PlayAgain);
        assert!(s.sync.is_none());
        assert_eq!(progress(&s), (0, false, false));
    }

    #[test]
    fn disconnect_resets_everything() {
        let mut s = connected();
        for id in 1..=5 {
            click(&mut s, id);
        }
        s.apply(SessionAction::Unlock);
        assert!(s.apply(SessionAction::WalletDisconnected));
        assert_eq!(s.click_count, 0);
        assert!(!s.unlocked);
        assert!(!s.connected);
        assert_eq!(s.wallet_address, None);
        assert!(s.particles.is_empty());
        assert!(s.sync.is_none());
        assert!(!s.apply(SessionAction::WalletDisconnected));
    }

    #[test]
    fn pending_unlock_is_cancelled_by_disconnect() {
        let mut s = connected();
        for id in 1..=5 {
            click(&mut s, id);
        }
        s.apply(SessionAction::WalletDisconnected);
        assert!(!s.apply(SessionAction::Unlock));
        assert!(!s.unlocked);
    }

    #[test]
    fn connecting_starts_a_clean_session() {
        let mut s = connected();
        click(&mut s, 1);
        s.apply(SessionAction::WalletConnected {
            address: "0xother".into(),
        });
        assert_eq!(s.click_count, 0);
        assert_eq!(s.wallet_address.as_deref(), Some("0xother"));
        assert!(s.particles.is_empty());
    }

    #[test]
    fn remote_record_restores_progress() {
        let mut s = connected();
        s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: ClaimStatus {
                exists: true,
                coins_collected: 3,
                completed: false,
            },
        });
        assert_eq!(progress(&s), (3, false, false));
        assert!(!s.is_near_unlock());
    }

    #[test]
    fn completed_record_unlocks_immediately() {
        let mut s = connected();
        s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: ClaimStatus {
                exists: true,
                coins_collected: 5,
                completed: true,
            },
        });
        assert!(s.unlocked);
        assert_eq!(s.click_count, 5);

        let mut short = connected();
        short.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: ClaimStatus {
                exists: true,
                coins_collected: 2,
                completed: true,
            },
        });
        assert!(short.unlocked);
        assert_eq!(short.click_count, CLICKS_TO_UNLOCK);
    }

    #[test]
    fn late_record_does_not_undo_pending_unlock() {
        let mut s = connected();
        for id in 1..=5 {
            click(&mut s, id);
        }
        assert!(s.unlock_pending);
        s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: ClaimStatus {
                exists: true,
                coins_collected: 3,
                completed: false,
            },
        });
        assert_eq!(progress(&s), (5, false, true));
        assert!(s.apply(SessionAction::Unlock));
        assert!(s.unlocked);
        assert_eq!(s.click_count, CLICKS_TO_UNLOCK);
    }

    #[test]
    fn late_record_merges_with_local_clicks() {
        let mut s = connected();
        click(&mut s, 1);
        click(&mut s, 2);
        let lower = ClaimStatus {
            exists: true,
            coins_collected: 1,
            completed: false,
        };
        s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: lower,
        });
        assert_eq!(progress(&s), (2, false, false));

        let higher = ClaimStatus {
            coins_collected: 4,
            ..lower
        };
        s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status: higher,
        });
        assert_eq!(progress(&s), (4, false, false));
        assert!(s.is_near_unlock());

        click(&mut s, 3);
        assert_eq!(progress(&s), (5, false, true));
        assert_eq!(s.sync.as_ref().unwrap().request.coins_collected, 5);
        assert!(s.apply(SessionAction::Unlock));
        assert!(s.unlocked);
    }

    #[test]
    fn unlock_requires_threshold_count() {
        let mut s = connected();
        click(&mut s, 1);
        s.unlock_pending = true;
        assert!(!s.apply(SessionAction::Unlock));
        assert!(!s.unlocked);
    }

    #[test]
    fn near_unlock_saturates() {
        let mut s = connected();
        s.click_count = u32::MAX;
        assert!(s.is_near_unlock());
    }

    #[test]
    fn stale_remote_record_is_dropped() {
        let mut s = connected();
        s.apply(SessionAction::WalletDisconnected);
        let status = ClaimStatus {
            exists: true,
            coins_collected: 4,
            completed: false,
        };
        assert!(!s.apply(SessionAction::RemoteLoaded {
            address: WALLET.into(),
            status,
        }));

        let mut other = connected();
        assert!(!other.apply(SessionAction::RemoteLoaded {
            address: "0xsomeoneelse".into(),
            status,
        }));
        assert_eq!(other.click_count, 0);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let s = Rc::new(Session::default());
        let next = s.clone().reduce(SessionAction::Unlock);
        assert!(Rc::ptr_eq(&s, &next));
        let next = s.clone().reduce(SessionAction::WalletConnected {
            address: WALLET.into(),
        });
        assert!(next.connected);
    }

    // Drives the reducer the way `App` does, against an in-memory store.
    fn run_session(store: &MemoryStore, clicks: u64) -> Session {
        let mut s = Session::default();
        s.apply(SessionAction::WalletConnected {
            address: WALLET.into(),
        });
        if let Some(status) = pollster::block_on(load_best_effort(store, WALLET)) {
            s.apply(SessionAction::RemoteLoaded {
                address: WALLET.into(),
                status,
            });
        }
        let mut sent = 0;
        for id in 1..=clicks {
            click(&mut s, id);
            if let Some(ticket) = s.sync.clone() {
                if ticket.seq > sent {
                    sent = ticket.seq;
                    pollster::block_on(sync_best_effort(store, &ticket.request));
                }
            }
        }
        if s.unlock_pending {
            s.apply(SessionAction::Unlock);
        }
        s
    }

    #[test]
    fn new_wallet_unlocks_after_five_clicks() {
        let store = MemoryStore::default();
        let s = run_session(&store, 5);
        assert!(s.unlocked);
        assert_eq!(s.click_count, 5);
        let submits = store.submits.borrow();
        assert_eq!(submits.len(), 5);
        assert_eq!(submits.last().unwrap().coins_collected, 5);
        assert_eq!(submits.last().unwrap().wallet_address, WALLET);
    }

    #[test]
    fn returning_wallet_needs_two_more_clicks() {
        let record = ClaimStatus {
            exists: true,
            coins_collected: 3,
            completed: false,
        };
        let store = MemoryStore::with_record(WALLET, record);
        let s = run_session(&store, 2);
        assert!(s.unlocked);
        assert_eq!(s.click_count, 5);
        assert_eq!(store.submits.borrow().len(), 2);
    }

    #[test]
    fn progress_survives_reload() {
        let store = MemoryStore::default();
        let s = run_session(&store, 3);
        assert_eq!(progress(&s), (3, false, false));
        let s = run_session(&store, 1);
        assert_eq!(progress(&s), (4, false, false));
        let s = run_session(&store, 0);
        assert_eq!(s.click_count, 4);
    }

    #[test]
    fn offline_store_keeps_session_usable() {
        let store = MemoryStore {
            offline: true,
            ..Default::default()
        };
        let s = run_session(&store, 5);
        assert!(s.unlocked);
        assert!(store.submits.borrow().is_empty());
    }
}
