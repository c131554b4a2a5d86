//! The game engine: one struct that wires store, narrator, and dice.
//!
//! Operations are synchronous and run one at a time; a caller that
//! serves multiple users must serialize each user's requests itself,
//! since pool updates are read-modify-write over store snapshots.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing::info;

use df_core::{
    Ancestry, Character, CharacterClass, CharacterId, GameSession, RollRecord, SessionId, UserId,
};
use df_director::{classify_action, detect_scene_change};
use df_mechanics::{
    DualRoll, apply_outcome_to_pools, calculate_damage, check_death_save, resolve,
};
use df_narrative::{
    NarrativePrompt, Narrator, action_prompt, narrate_or_fallback, opening_prompt, roll_prompt,
};
use df_store::Store;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::report::{ActionReport, DamageReport, RollReport, SessionStart};

/// Orchestrates one game: characters, sessions, rolls, and narration.
pub struct GameEngine<S: Store, N: Narrator> {
    store: S,
    narrator: N,
    config: EngineConfig,
    rng: StdRng,
    narrated: usize,
}

impl<S: Store, N: Narrator> GameEngine<S, N> {
    /// Build an engine over a store and a narrator.
    pub fn new(store: S, narrator: N, config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            store,
            narrator,
            config,
            rng,
            narrated: 0,
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a character for a user, deactivating any previous one.
    pub fn create_character(
        &mut self,
        user: UserId,
        name: &str,
        class: CharacterClass,
        ancestry: Ancestry,
    ) -> EngineResult<Character> {
        let character = self
            .store
            .insert_character(Character::new(user, name, class, ancestry))?;
        info!(%user, name = %character.name, %class, %ancestry, "character created");
        Ok(character)
    }

    /// The user's active character, if any.
    pub fn active_character(&self, user: UserId) -> EngineResult<Option<Character>> {
        Ok(self.store.active_character(user)?)
    }

    /// The user's active session, if any.
    pub fn active_session(&self, user: UserId) -> EngineResult<Option<GameSession>> {
        Ok(self.store.active_session(user)?)
    }

    /// Start a new session for a character the user owns, closing any
    /// session already running.
    pub fn start_session(
        &mut self,
        user: UserId,
        character_id: CharacterId,
    ) -> EngineResult<SessionStart> {
        let character = self.store.character_for_user(character_id, user)?;

        let mut session = GameSession::new(user, character.id);
        session.change_scene(
            self.config.opening_scene.clone(),
            Some(json!({ "scene": "intro", "location": "starting_area" })),
        );

        let narrative = self.narrate(&opening_prompt(&character));
        session.push_narrative(&narrative);

        let session = self.store.insert_session(session)?;
        info!(%user, session = %session.id, character = %character.name, "session started");

        Ok(SessionStart {
            session,
            character,
            narrative,
        })
    }

    /// Process a free-text player action: classify it, move the scene if
    /// it travels, narrate it, and log it.
    pub fn perform_action(
        &mut self,
        user: UserId,
        action: &str,
        description: &str,
    ) -> EngineResult<ActionReport> {
        let character = self.require_character(user)?;
        let mut session = self.require_session(user)?;

        let intent = classify_action(action);
        let scene_change = detect_scene_change(action);

        if let Some(scene) = scene_change {
            session.change_scene(
                scene.label(),
                Some(json!({ "scene": scene.slug(), "location": scene.label() })),
            );
        }

        let narrative = self.narrate(&action_prompt(&character, action, description));
        session.push_narrative(&narrative);

        let mut log_entry = format!("action: {action}");
        if !description.is_empty() {
            log_entry.push_str(&format!(" - {description}"));
        }
        session.push_action(log_entry);

        let session = self.store.update_session(session)?;
        info!(%user, ?intent, ?scene_change, "action processed");

        Ok(ActionReport {
            intent,
            scene_change,
            narrative,
            session,
        })
    }

    /// Roll the dual dice for the active character, update Hope/Fear,
    /// record the roll, and narrate the outcome.
    pub fn roll_dice(
        &mut self,
        user: UserId,
        action_type: &str,
        difficulty: Option<i32>,
        modifier: i32,
    ) -> EngineResult<RollReport> {
        let mut character = self.require_character(user)?;
        let mut session = self.require_session(user)?;

        let difficulty = difficulty.unwrap_or(self.config.default_difficulty);
        let roll = DualRoll::roll(&mut self.rng);
        let outcome = resolve(roll, difficulty, modifier);

        let hope_before = character.hope.current();
        let fear_before = character.fear.current();
        apply_outcome_to_pools(&mut character.hope, &mut character.fear, &outcome);
        character.touch();
        let character = self.store.update_character(character)?;

        let record = RollRecord::new(
            session.id,
            user,
            outcome.hope_die,
            outcome.fear_die,
            outcome.modifier,
            difficulty,
            action_type,
            outcome.success,
            outcome.description.clone(),
        );
        self.store.record_roll(record.clone())?;

        let narrative = self.narrate(&roll_prompt(&character, &outcome, hope_before, fear_before));
        session.push_narrative(&narrative);
        session.push_action(format!("roll: {}", outcome.description));
        self.store.update_session(session)?;

        info!(
            %user,
            hope = outcome.hope_die,
            fear = outcome.fear_die,
            success = outcome.success,
            "dice rolled"
        );

        Ok(RollReport {
            outcome,
            character,
            record,
            narrative,
        })
    }

    /// Apply a hit to the active character. Rolls a death save when hit
    /// points reach 0; a stabilized character stays at 0 but alive.
    pub fn take_damage(
        &mut self,
        user: UserId,
        attacker_strength: i32,
        weapon_damage: i32,
    ) -> EngineResult<DamageReport> {
        let mut character = self.require_character(user)?;

        let damage = calculate_damage(attacker_strength, character.armor_score, weapon_damage);
        character.hit_points.spend(damage);
        character.touch();

        let death_save = check_death_save(character.hit_points.current(), &mut self.rng);
        let character = self.store.update_character(character)?;

        info!(%user, damage, dying = character.is_dying(), "damage applied");

        Ok(DamageReport {
            damage,
            character,
            death_save,
        })
    }

    /// Close a session explicitly. The session must be the user's active
    /// one.
    pub fn end_session(&mut self, user: UserId, session_id: SessionId) -> EngineResult<GameSession> {
        let mut session = self.store.session(session_id)?;
        if session.user_id != user || !session.is_active {
            return Err(EngineError::NoActiveSession(user));
        }
        session.close();
        let session = self.store.update_session(session)?;
        info!(%user, session = %session.id, "session ended");
        Ok(session)
    }

    /// Roll history for the user's active session, newest first.
    pub fn roll_history(&self, user: UserId) -> EngineResult<Vec<RollRecord>> {
        let session = self.require_session(user)?;
        Ok(self.store.rolls_for_session(session.id)?)
    }

    fn require_character(&self, user: UserId) -> EngineResult<Character> {
        self.store
            .active_character(user)?
            .ok_or(EngineError::NoActiveCharacter(user))
    }

    fn require_session(&self, user: UserId) -> EngineResult<GameSession> {
        self.store
            .active_session(user)?
            .ok_or(EngineError::NoActiveSession(user))
    }

    fn narrate(&mut self, prompt: &NarrativePrompt) -> String {
        let text = narrate_or_fallback(&mut self.narrator, prompt, self.narrated);
        self.narrated += 1;
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_director::{ActionCategory, Scene};
    use df_narrative::{FallbackNarrator, NarrativeError, NarrativeResult};
    use df_store::MemoryStore;

    /// Narrator that fails every call, for fallback coverage.
    struct BrokenNarrator;

    impl Narrator for BrokenNarrator {
        fn generate(&mut self, _prompt: &NarrativePrompt) -> NarrativeResult<String> {
            Err(NarrativeError::Generation("offline".to_string()))
        }
    }

    /// Narrator that echoes the prompt header, for content assertions.
    struct EchoNarrator;

    impl Narrator for EchoNarrator {
        fn generate(&mut self, prompt: &NarrativePrompt) -> NarrativeResult<String> {
            Ok(format!("[narrated for {}]", prompt.character.name))
        }
    }

    fn engine() -> GameEngine<MemoryStore, FallbackNarrator> {
        GameEngine::new(
            MemoryStore::new(),
            FallbackNarrator::new(),
            EngineConfig::default(),
        )
    }

    fn ready_engine() -> (GameEngine<MemoryStore, FallbackNarrator>, UserId) {
        let mut e = engine();
        let user = UserId(1);
        let c = e
            .create_character(user, "Kael", CharacterClass::Warrior, Ancestry::Orc)
            .unwrap();
        e.start_session(user, c.id).unwrap();
        (e, user)
    }

    #[test]
    fn create_character_supersedes_previous() {
        let mut e = engine();
        let user = UserId(1);
        e.create_character(user, "Old", CharacterClass::Wizard, Ancestry::Human)
            .unwrap();
        let new = e
            .create_character(user, "New", CharacterClass::Ranger, Ancestry::Elf)
            .unwrap();

        let active = e.active_character(user).unwrap().unwrap();
        assert_eq!(active.id, new.id);
        assert_eq!(active.name, "New");
    }

    #[test]
    fn start_session_sets_opening_scene_and_narrative() {
        let (e, user) = ready_engine();
        let session = e.active_session(user).unwrap().unwrap();
        assert_eq!(session.current_scene, "The adventure begins");
        assert_eq!(session.game_state["scene"], "intro");
        assert!(!session.narrative_log.is_empty());
    }

    #[test]
    fn start_session_rejects_foreign_character() {
        let mut e = engine();
        let owner = UserId(1);
        let thief = UserId(2);
        let c = e
            .create_character(owner, "Kael", CharacterClass::Warrior, Ancestry::Orc)
            .unwrap();
        assert!(matches!(
            e.start_session(thief, c.id),
            Err(EngineError::Store(df_store::StoreError::AccessDenied { .. }))
        ));
    }

    #[test]
    fn second_session_supersedes_first() {
        let (mut e, user) = ready_engine();
        let first = e.active_session(user).unwrap().unwrap();
        let c = e.active_character(user).unwrap().unwrap();
        let second = e.start_session(user, c.id).unwrap().session;

        assert_eq!(e.active_session(user).unwrap().unwrap().id, second.id);
        assert!(!e.store().session(first.id).unwrap().is_active);
    }

    #[test]
    fn action_classifies_and_logs() {
        let (mut e, user) = ready_engine();
        let report = e.perform_action(user, "I attack the orc", "").unwrap();

        assert_eq!(report.intent.category, Some(ActionCategory::Combat));
        assert_eq!(report.intent.difficulty, Some(12));
        assert!(report.scene_change.is_none());

        let session = e.active_session(user).unwrap().unwrap();
        assert_eq!(session.action_log.len(), 1);
        assert_eq!(session.action_log[0].entry, "action: I attack the orc");
    }

    #[test]
    fn action_with_description_logs_both() {
        let (mut e, user) = ready_engine();
        e.perform_action(user, "search the room", "under the bed too")
            .unwrap();
        let session = e.active_session(user).unwrap().unwrap();
        assert_eq!(
            session.action_log[0].entry,
            "action: search the room - under the bed too"
        );
    }

    #[test]
    fn travel_action_changes_scene() {
        let (mut e, user) = ready_engine();
        let report = e.perform_action(user, "go to the tavern", "").unwrap();

        assert_eq!(report.scene_change, Some(Scene::Tavern));
        let session = e.active_session(user).unwrap().unwrap();
        assert_eq!(session.current_scene, "The Tavern");
        assert_eq!(session.game_state["scene"], "tavern");
    }

    #[test]
    fn action_without_session_fails() {
        let mut e = engine();
        let user = UserId(1);
        e.create_character(user, "Kael", CharacterClass::Warrior, Ancestry::Orc)
            .unwrap();
        assert!(matches!(
            e.perform_action(user, "look around", ""),
            Err(EngineError::NoActiveSession(_))
        ));
    }

    #[test]
    fn roll_updates_pools_and_records() {
        let (mut e, user) = ready_engine();
        let before = e.active_character(user).unwrap().unwrap();
        let report = e.roll_dice(user, "combat", Some(12), 0).unwrap();

        // Exactly one pool moved, in the direction of the verdict.
        let after = &report.character;
        if report.outcome.success {
            assert!(after.hope.current() > before.hope.current());
            assert_eq!(after.fear.current(), before.fear.current());
        } else {
            assert!(after.fear.current() > before.fear.current());
            assert_eq!(after.hope.current(), before.hope.current());
        }

        let history = e.roll_history(user).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action_type, "combat");
        assert_eq!(history[0].success, report.outcome.success);

        let session = e.active_session(user).unwrap().unwrap();
        assert_eq!(session.action_log.len(), 1);
        assert!(session.action_log[0].entry.starts_with("roll: "));
    }

    #[test]
    fn rolls_are_reproducible_per_seed() {
        let run = |seed: u64| {
            let mut e = GameEngine::new(
                MemoryStore::new(),
                FallbackNarrator::new(),
                EngineConfig::default().with_seed(seed),
            );
            let user = UserId(1);
            let c = e
                .create_character(user, "Kael", CharacterClass::Warrior, Ancestry::Orc)
                .unwrap();
            e.start_session(user, c.id).unwrap();
            let r = e.roll_dice(user, "general", None, 0).unwrap();
            (r.outcome.hope_die, r.outcome.fear_die)
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn roll_uses_default_difficulty() {
        let (mut e, user) = ready_engine();
        let report = e.roll_dice(user, "general", None, 0).unwrap();
        assert_eq!(report.outcome.difficulty, 12);
        assert_eq!(report.record.difficulty, 12);
    }

    #[test]
    fn damage_respects_armor_floor_and_death_save() {
        let (mut e, user) = ready_engine();

        // A gentle hit: no death save.
        let report = e.take_damage(user, 0, 6).unwrap();
        assert_eq!(report.damage, 6);
        assert!(report.death_save.is_none());

        // An overwhelming hit: pool floors at 0 and a save is rolled.
        let report = e.take_damage(user, 10, 100).unwrap();
        assert_eq!(report.character.hit_points.current(), 0);
        let save = report.death_save.expect("death save at 0 hp");
        assert_eq!(save.stabilized, save.hope_roll > save.fear_roll);
    }

    #[test]
    fn end_session_closes_and_rejects_stale_ids() {
        let (mut e, user) = ready_engine();
        let session = e.active_session(user).unwrap().unwrap();

        let closed = e.end_session(user, session.id).unwrap();
        assert!(!closed.is_active);
        assert!(e.active_session(user).unwrap().is_none());

        // Ending it twice is refused.
        assert!(matches!(
            e.end_session(user, session.id),
            Err(EngineError::NoActiveSession(_))
        ));
    }

    #[test]
    fn broken_narrator_falls_back_silently() {
        let mut e = GameEngine::new(MemoryStore::new(), BrokenNarrator, EngineConfig::default());
        let user = UserId(1);
        let c = e
            .create_character(user, "Kael", CharacterClass::Warrior, Ancestry::Orc)
            .unwrap();

        let start = e.start_session(user, c.id).unwrap();
        assert_eq!(start.narrative, df_narrative::FALLBACK_LINES[0]);

        // Consecutive failures rotate through the fixed lines.
        let report = e.perform_action(user, "look around", "").unwrap();
        assert_eq!(report.narrative, df_narrative::FALLBACK_LINES[1]);
    }

    #[test]
    fn working_narrator_passes_through() {
        let mut e = GameEngine::new(MemoryStore::new(), EchoNarrator, EngineConfig::default());
        let user = UserId(1);
        let c = e
            .create_character(user, "Mira", CharacterClass::Wizard, Ancestry::Human)
            .unwrap();
        let start = e.start_session(user, c.id).unwrap();
        assert_eq!(start.narrative, "[narrated for Mira]");
    }
}
