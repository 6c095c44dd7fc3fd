use amora_engine::config::Settings;
use amora_engine::core::{find_users_within_radius, CompatibilityEngine};
use amora_engine::models::{GeoPoint, ScoringWeights, UserRecord};
use amora_engine::services::{
    geolocation::save_location, ConsentService, ConsolePrompter, Directory, InMemoryDirectory,
    LabelTraitProvider, MeetingRoster, ModerationService,
};
use tracing::{error, info, warn};

/// Walk the matching pipeline end to end against a seeded directory:
/// consent-gated location saves, a nearby sweep, pair evaluation, and a
/// moderation pass.
fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Amora compatibility engine demo...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let engine = CompatibilityEngine::new(
        weights,
        settings.scoring.schedule_threshold,
        settings.matching.near_radius_km,
        Box::new(LabelTraitProvider),
    );

    info!(
        "Engine initialized (weights: proximity={} interests={} traits={}, threshold: {})",
        weights.proximity, weights.interests, weights.traits, settings.scoring.schedule_threshold
    );

    let mut directory = InMemoryDirectory::new();
    let mut consent = ConsentService::new(Box::new(ConsolePrompter));
    let mut roster = MeetingRoster::new();
    let moderation = ModerationService::new(
        settings.moderation.blocklist.clone(),
        settings.moderation.flag_threshold,
    );

    seed_users(&mut directory);

    // Alice and Bob granted consent earlier; Carol gets the interactive prompt
    consent.set("alice", true);
    consent.set("bob", true);

    for (user_id, lat, lon) in [
        ("alice", 40.7580, -73.9855),
        ("bob", 40.7488, -73.9857),
        ("carol", 40.6782, -73.9442),
    ] {
        match GeoPoint::new(lat, lon) {
            Ok(point) => {
                save_location(&mut directory, &mut consent, user_id, point);
            }
            Err(e) => warn!("Invalid coordinates for {}: {}", user_id, e),
        }
    }

    // Nearby sweep around Alice
    let candidates = directory.all_users();
    if let Some(alice) = directory.resolve("alice") {
        let nearby =
            find_users_within_radius(&alice, &candidates, settings.matching.search_radius_km);
        info!(
            "Users within {} km of {}: {:?}",
            settings.matching.search_radius_km,
            alice.name,
            nearby.iter().map(|u| u.user_id.as_str()).collect::<Vec<_>>()
        );
    }

    // Evaluate the pair and schedule when they clear the bar
    let (decision, meeting_id) =
        engine.schedule_if_compatible(&directory, &mut roster, "alice", "bob");

    let result = engine.compatibility_by_id(&directory, "alice", "bob");
    println!(
        "{}",
        serde_json::json!({
            "pair": ["alice", "bob"],
            "result": result,
            "decision": decision,
            "meetingId": meeting_id,
        })
    );

    // Moderation pass over a sample message
    let message = "Fancy a hike this weekend?";
    let allowed = moderation.moderate_text(message, "carol", "alice", &mut directory);
    info!("Message from carol allowed: {}", allowed);
}

fn seed_users(directory: &mut InMemoryDirectory) {
    let users = vec![
        UserRecord::new("alice", "Alice")
            .with_interests(["music", "hiking"])
            .with_traits(["open", "curious"]),
        UserRecord::new("bob", "Bob")
            .with_interests(["music", "hiking"])
            .with_traits(["open", "curious"]),
        UserRecord::new("carol", "Carol")
            .with_interests(["chess", "painting"])
            .with_traits(["calm"]),
    ];

    for user in users {
        let user_id = user.user_id.clone();
        if let Err(e) = directory.create_user(user) {
            warn!("Could not seed user {}: {}", user_id, e);
        }
    }

    info!("Seeded {} demo users", directory.len());
}
