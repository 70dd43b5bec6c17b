// tests/profile_resolver_test.rs

use async_trait::async_trait;
use closet_core::profile::{ColorProfileResolver, ProfileStore, Resolution};
use closet_core::season::{ColorSeason, QuizAnswers, palette, score_quiz};
use closet_core::storage::run_migrations;
use closet_core::vision::{
    ContrastLevel, HairTone, Undertone, VisionAnalysis, VisionAnalyzer, VisionError,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Canned vision collaborator: either returns a fixed analysis or fails.
enum StubVision {
    Succeed(VisionAnalysis),
    Fail,
}

#[async_trait]
impl VisionAnalyzer for StubVision {
    async fn analyze(
        &self,
        _image_base64: &str,
        _quiz_season: ColorSeason,
        _quiz_confidence: u8,
    ) -> Result<VisionAnalysis, VisionError> {
        match self {
            StubVision::Succeed(analysis) => Ok(analysis.clone()),
            StubVision::Fail => Err(VisionError::Api("503 - backend overloaded".into())),
        }
    }
}

fn vision_saying(season: ColorSeason, agrees: bool) -> VisionAnalysis {
    VisionAnalysis {
        skin_undertone: Undertone::Cool,
        skin_undertone_confidence: 0.8,
        vein_appearance: Some("bluish".into()),
        contrast_level: ContrastLevel::High,
        hair_tone: HairTone::Cool,
        eye_color: "gray-blue".into(),
        recommended_season: season,
        confidence: 0.9,
        reasoning: "high-contrast cool coloring".into(),
        agrees_with_quiz: agrees,
    }
}

/// Answers that decisively score as WarmSpring.
fn warm_spring_answers() -> QuizAnswers {
    QuizAnswers {
        veins: "green".into(),
        jewelry: "gold".into(),
        white_shade: "ivory".into(),
        sun_reaction: "tan".into(),
        hair: "golden".into(),
        eyes: "warm_brown".into(),
        contrast: "high".into(),
        color_family: "warm_bright".into(),
    }
}

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite pool");
    run_migrations(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn conflict_round_trip_finalizes_on_chosen_season() {
    let pool = setup_pool().await;
    let resolver = ColorProfileResolver::new(
        StubVision::Succeed(vision_saying(ColorSeason::CoolWinter, false)),
        ProfileStore::new(pool.clone()),
    );

    let outcome = resolver.resolve(warm_spring_answers(), "AAAA").await.unwrap();
    let conflict = match outcome {
        Resolution::Conflict(c) => c,
        Resolution::Finalized(p) => panic!("expected conflict, got finalized {:?}", p),
    };

    // Both candidates exposed with their palettes
    assert_eq!(conflict.quiz.season, ColorSeason::WarmSpring);
    assert_eq!(conflict.vision.recommended_season, ColorSeason::CoolWinter);
    assert_eq!(conflict.quiz_palette.best, palette(ColorSeason::WarmSpring).best);
    assert_eq!(conflict.vision_palette.best, palette(ColorSeason::CoolWinter).best);

    // Nothing persisted while the conflict is pending
    assert!(ProfileStore::new(pool.clone()).load().await.unwrap().is_none());

    let profile = resolver
        .resolve_conflict(&conflict, ColorSeason::CoolWinter)
        .await
        .unwrap();
    assert_eq!(profile.recommended_season, ColorSeason::CoolWinter);
    assert_eq!(
        profile.best_colors,
        palette(ColorSeason::CoolWinter)
            .best
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
    );

    let stored = ProfileStore::new(pool).load().await.unwrap().unwrap();
    assert_eq!(stored.recommended_season, ColorSeason::CoolWinter);
}

#[tokio::test]
async fn vision_failure_confirms_quiz_season() {
    let pool = setup_pool().await;
    let resolver = ColorProfileResolver::new(StubVision::Fail, ProfileStore::new(pool.clone()));

    let outcome = resolver.resolve(warm_spring_answers(), "AAAA").await.unwrap();
    let profile = match outcome {
        Resolution::Finalized(p) => p,
        Resolution::Conflict(_) => panic!("vision failure must not surface a conflict"),
    };

    assert_eq!(profile.recommended_season, ColorSeason::WarmSpring);
    assert_eq!(profile.quiz_season, ColorSeason::WarmSpring);
    // Degraded path: no vision payload stored, neutral confidence
    assert!(profile.vision.is_none());
    assert_eq!(profile.confidence, 0.5);
}

#[tokio::test]
async fn agreement_uses_vision_season() {
    let pool = setup_pool().await;
    // Vision picks a different season but explicitly flags agreement; the
    // vision season wins whenever agreement holds.
    let resolver = ColorProfileResolver::new(
        StubVision::Succeed(vision_saying(ColorSeason::CoolSummer, true)),
        ProfileStore::new(pool.clone()),
    );

    let outcome = resolver.resolve(warm_spring_answers(), "AAAA").await.unwrap();
    let profile = match outcome {
        Resolution::Finalized(p) => p,
        Resolution::Conflict(_) => panic!("flagged agreement must finalize"),
    };

    assert_eq!(profile.recommended_season, ColorSeason::CoolSummer);
    assert!(profile.vision.is_some());
    assert_eq!(profile.confidence, 0.9);
}

#[tokio::test]
async fn finalize_replaces_prior_profile() {
    let pool = setup_pool().await;
    let store = ProfileStore::new(pool.clone());

    let first = ColorProfileResolver::new(
        StubVision::Succeed(vision_saying(ColorSeason::WarmSpring, true)),
        store.clone(),
    );
    let second = ColorProfileResolver::new(
        StubVision::Succeed(vision_saying(ColorSeason::CoolWinter, true)),
        store.clone(),
    );

    first.resolve(warm_spring_answers(), "AAAA").await.unwrap();
    second.resolve(warm_spring_answers(), "AAAA").await.unwrap();

    // Full replace, single row
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM color_profile")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.recommended_season, ColorSeason::CoolWinter);
}

#[tokio::test]
async fn clear_removes_profile() {
    let pool = setup_pool().await;
    let store = ProfileStore::new(pool.clone());
    let resolver = ColorProfileResolver::new(
        StubVision::Succeed(vision_saying(ColorSeason::WarmSpring, true)),
        store.clone(),
    );

    resolver.resolve(warm_spring_answers(), "AAAA").await.unwrap();
    assert!(store.load().await.unwrap().is_some());

    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
}

#[test]
fn quiz_phase_is_pure_and_matches_resolver_input() {
    let result = score_quiz(&warm_spring_answers());
    assert_eq!(result.season, ColorSeason::WarmSpring);
    assert_eq!(result.confidence, 100);
}
