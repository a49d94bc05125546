use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    coin_button::CoinButton, dashboard::Dashboard, game_stats::GameStats,
    particle_effect::ParticleEffect, progress_panel::ProgressPanel, title_banner::TitleBanner,
    wallet_connect::WalletConnect,
};
use crate::api::{HttpClaimStore, load_best_effort, sync_best_effort};
use crate::browser::{element_center, is_space};
use crate::model::{
    CLICKS_TO_UNLOCK, COIN_ANIMATION_MS, PARTICLE_LIFETIME_MS, Session, SessionAction,
    UNLOCK_DELAY_MS,
};

const MAIN_STYLE: &str = "position:relative; min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:16px; overflow:hidden;";

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::default);
    let store = use_memo((), |_| HttpClaimStore::from_env());
    let coin_ref = use_node_ref();
    let next_click_id = use_mut_ref(|| 0_u64);

    // Push every queued count to the claim API, best effort
    {
        let store = store.clone();
        use_effect_with(session.sync.clone(), move |ticket| {
            if let Some(ticket) = ticket.clone() {
                spawn_local(async move {
                    sync_best_effort(&*store, &ticket.request).await;
                });
            }
            || ()
        });
    }
    // Threshold reached: show the dashboard once the flip animation is done
    {
        let session = session.clone();
        let pending = session.unlock_pending;
        use_effect_with(pending, move |pending| {
            if *pending {
                Timeout::new(UNLOCK_DELAY_MS, move || session.dispatch(SessionAction::Unlock)).forget();
            }
            || ()
        });
    }

    let collect = {
        let session = session.clone();
        let coin_ref = coin_ref.clone();
        let next_click_id = next_click_id.clone();
        Callback::from(move |_: ()| {
            let id = {
                let mut next = next_click_id.borrow_mut();
                *next += 1;
                *next
            };
            let (x, y) = element_center(&coin_ref).unwrap_or_default();
            session.dispatch(SessionAction::CoinClick { id, x, y });
            let expire = session.clone();
            Timeout::new(PARTICLE_LIFETIME_MS, move || {
                expire.dispatch(SessionAction::ParticleExpired { id })
            })
            .forget();
            let settle = session.clone();
            Timeout::new(COIN_ANIMATION_MS, move || {
                settle.dispatch(SessionAction::AnimationFinished { id })
            })
            .forget();
        })
    };

    // Space bar clicks the coin while collecting
    {
        let collect = collect.clone();
        let enabled = session.can_collect();
        use_effect_with(enabled, move |enabled| {
            let listener = if *enabled {
                web_sys::window().map(|window| {
                    let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if is_space(&e) {
                            e.prevent_default();
                            collect.emit(());
                        }
                    }) as Box<dyn FnMut(_)>);
                    if let Err(err) = window
                        .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    {
                        log::warn!("could not register keydown listener: {:?}", err);
                    }
                    (window, keydown_cb)
                })
            } else {
                None
            };
            move || {
                if let Some((window, keydown_cb)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_connect = {
        let session = session.clone();
        let store = store.clone();
        Callback::from(move |address: String| {
            session.dispatch(SessionAction::WalletConnected {
                address: address.clone(),
            });
            let session = session.clone();
            let store = store.clone();
            spawn_local(async move {
                if let Some(status) = load_best_effort(&*store, &address).await {
                    session.dispatch(SessionAction::RemoteLoaded { address, status });
                }
            });
        })
    };
    let on_disconnect = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::WalletDisconnected))
    };
    let on_play_again = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::PlayAgain))
    };

    if !session.connected {
        return html! {
            <main style={MAIN_STYLE}>
                <TitleBanner subtitle="Connect your wallet to start the coin-collecting adventure!" />
                <WalletConnect {on_connect} {on_disconnect} />
                <footer style="position:absolute; bottom:16px; font-size:12px; color:#9ca3af;">
                    <p>{"SLERF Token Dashboard • Built with Rust & Yew"}</p>
                </footer>
            </main>
        };
    }

    if session.unlocked {
        return html! {
            <Dashboard
                click_count={session.click_count}
                wallet_address={session.wallet_address.clone()}
                {on_play_again}
            />
        };
    }

    html! {
        <main style={MAIN_STYLE}>
            { for session.particles.iter().map(|p| html! { <ParticleEffect key={p.id} x={p.x} y={p.y} /> }) }

            <div style="position:absolute; top:16px; right:16px;">
                <WalletConnect
                    {on_connect}
                    {on_disconnect}
                    connected={session.connected}
                    address={session.wallet_address.clone()}
                />
            </div>

            <TitleBanner subtitle={format!("Click the golden coin {} times to unlock your trading dashboard!", CLICKS_TO_UNLOCK)} />

            <GameStats click_count={session.click_count} total_clicks={CLICKS_TO_UNLOCK} />

            <div style="position:relative; margin-bottom:32px;">
                <CoinButton
                    on_click={collect}
                    is_animating={session.is_animating()}
                    is_near_unlock={session.is_near_unlock()}
                    click_count={session.click_count}
                    node_ref={coin_ref}
                />
                if session.is_near_unlock() {
                    <div class="ping" style="position:absolute; inset:0; border-radius:50%; background:#ffd700; opacity:0.3; pointer-events:none;"></div>
                }
            </div>

            <ProgressPanel click_count={session.click_count} total_clicks={CLICKS_TO_UNLOCK} />

            <footer style="position:absolute; bottom:16px; font-size:12px; color:#9ca3af;">
                <p>{"SLERF Token Dashboard • Built with Rust & Yew"}</p>
            </footer>
        </main>
    }
}
