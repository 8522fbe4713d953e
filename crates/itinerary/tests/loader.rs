use temp_dir::TempDir;
use tripdeck_itinerary::{DataLoader, Dataset, Language, RouteOption};

fn write_option_files(dir: &TempDir) -> anyhow::Result<()> {
    std::fs::write(
        dir.child("option1.json"),
        r#"[
            { "day": 1, "title": "Tokyo", "highlights": "Shibuya; Meiji Shrine", "lat": 35.6762, "lng": 139.6503 },
            { "day": 2, "title": "Tokyo – Hakone", "highlights": ["Ropeway"], "lat": 35.2324, "lng": 139.1069 }
        ]"#,
    )?;
    std::fs::write(
        dir.child("option2.json"),
        r#"[ { "day": 1, "title": "Sapporo", "highlights": [] } ]"#,
    )?;

    Ok(())
}

#[tokio::test]
async fn loads_both_options_and_marks_absent_german_variants() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_option_files(&dir)?;

    let store = DataLoader::new(dir.path()).load().await?;

    let days = store.current_days(RouteOption::Option1, Language::En);
    assert_eq!(days.len(), 2);
    // Legacy highlights string got normalized on load.
    assert_eq!(days[0].highlights, vec!["Shibuya", "Meiji Shrine"]);

    assert_eq!(
        store.dataset(RouteOption::Option1, Language::De),
        &Dataset::Missing,
    );
    assert!(store.has_ready());

    Ok(())
}

#[tokio::test]
async fn german_variant_is_loaded_and_preferred() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_option_files(&dir)?;
    std::fs::write(
        dir.child("option1-de.json"),
        r#"[ { "day": 1, "title": "Tokio", "highlights": ["Shibuya"] } ]"#,
    )?;

    let store = DataLoader::new(dir.path()).load().await?;

    let days = store.current_days(RouteOption::Option1, Language::De);
    assert_eq!(days[0].title, "Tokio");

    Ok(())
}

#[tokio::test]
async fn unparsable_german_variant_degrades_to_failed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_option_files(&dir)?;
    std::fs::write(dir.child("option1-de.json"), "{ not json")?;

    let store = DataLoader::new(dir.path()).load().await?;

    assert_eq!(
        store.dataset(RouteOption::Option1, Language::De),
        &Dataset::Failed,
    );
    // Fallback still serves the English records.
    assert_eq!(
        store.current_days(RouteOption::Option1, Language::De).len(),
        2,
    );

    Ok(())
}

#[tokio::test]
async fn missing_english_dataset_is_fatal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.child("option1.json"),
        r#"[ { "day": 1, "title": "Tokyo" } ]"#,
    )?;
    // option2.json deliberately absent.

    let result = DataLoader::new(dir.path()).load().await;
    assert!(result.is_err());

    Ok(())
}
