//! Listener system for event-driven reactions.
//!
//! Listeners are standing rules that watch the event stream and may pass
//! an event on, transform it, cancel it, or follow it with more events.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: Everything the engine processes
//! - [`Condition`]: When a listener reacts (evaluated by [`ConditionEvaluator`])
//! - [`StatusEffect`]: Declarative template for a listener
//! - [`Duration`] / [`DurationTracker`]: When a listener goes away
//! - [`Listener`]: Runtime rule with a fixed [`Reaction`]
//!
//! ## Precedence
//!
//! The engine keeps listeners in one ordered list. Earlier listeners see an
//! event first and whatever they emit is all later listeners ever observe.
//!
//! ## Example Usage
//!
//! ```
//! use duel_engine::core::{Competitor, EngineState, InstanceId, Loadout, PlayerId};
//! use duel_engine::effects::{Effect, EffectKind};
//! use duel_engine::triggers::{Condition, Duration, GameEvent, Listener, ListenerKey, StatusEffect};
//!
//! let alice = PlayerId::new("alice");
//! let bob = PlayerId::new("bob");
//! let state = EngineState::new(
//!     Competitor::new(alice.clone(), Loadout::new(20, 1)),
//!     Competitor::new(bob.clone(), Loadout::new(20, 1)),
//! );
//!
//! // Bob's one-shot shield against damage
//! let shield = StatusEffect::negate(Condition::before_effect(Some(EffectKind::Damage)))
//!     .with_duration(Duration::Charges(1));
//! let mut listener = Listener::status(ListenerKey(0), InstanceId(7), bob.clone(), shield);
//!
//! let hit = GameEvent::effect(Effect::damage(5).to_enemy(), alice);
//! let out = listener.handle(&hit, &state);
//!
//! // The hit is gone; only the shield's own removal remains
//! assert_eq!(out.len(), 1);
//! assert!(out[0].as_effect().is_some_and(|e| e.removes_listener(InstanceId(7))));
//! ```

mod condition;
mod duration;
mod event;
mod listener;
mod status;

pub use condition::{Condition, ConditionContext, ConditionEvaluator};
pub use duration::{Duration, DurationTracker};
pub use event::{GameEvent, LifecyclePhase};
pub use listener::{Listener, ListenerKey, Reaction, Reactions};
pub use status::{StatusEffect, StatusKind};
