//! Test data

use chart_catalog_server::catalog::{Difficulty, Song};

use super::constants::*;

fn song(
    id: i64,
    title: &str,
    artist: &str,
    difficulty: Difficulty,
    constant: f64,
    level: &str,
) -> Song {
    Song {
        id,
        image_url: format!("covers/{}.jpg", id),
        title: title.to_string(),
        artist: artist.to_string(),
        difficulty,
        constant,
        level: level.to_string(),
        version: "Arcaea".to_string(),
    }
}

/// The default catalog, in the order the data service returns it.
pub fn create_test_songs() -> Vec<Song> {
    let songs = vec![
        song(TEMPESTISSIMO_ID, "Tempestissimo", "t+pazolite", Difficulty::Beyond, 11.5, "11+"),
        song(GRIEVOUS_LADY_ID, "Grievous Lady", "Team Grimoire vs Laur", Difficulty::Future, 11.3, "11"),
        song(102, "Fracture Ray", "Sakuzyo", Difficulty::Future, 11.2, "11"),
        song(103, "anima", "ak+q", Difficulty::Beyond, 11.0, "11"),
        song(106, "Axium Crisis", "ak+q", Difficulty::Future, 10.4, "10"),
        song(107, "Ignotus", "ak+q", Difficulty::Future, 10.2, "10"),
        song(108, "Singularity", "ETIA.", Difficulty::Eternal, 9.8, "9+"),
        song(109, "Axium Crisis", "ak+q", Difficulty::Present, 8.0, "8"),
        song(110, "Ignotus", "ak+q", Difficulty::Present, 7.5, "7+"),
        song(111, "Grievous Lady", "Team Grimoire vs Laur", Difficulty::Present, 7.5, "7+"),
        song(LILLY_ID, "Lilly", "Juggernaut.", Difficulty::Past, 3.5, "3"),
        song(112, "Sayonara Hatsukoi", "REDSHiFT", Difficulty::Past, 1.5, "1"),
    ];
    assert_eq!(songs.len(), FIXTURE_SONG_COUNT);
    songs
}

/// `count` rows ordered by constant descending then id ascending.
pub fn create_song_rows(count: usize) -> Vec<Song> {
    (0..count)
        .map(|i| {
            let constant = 12.0 - (i / 100) as f64 * 0.1;
            song(
                i as i64 + 1,
                &format!("Generated Song {:04}", i),
                "Generated Artist",
                Difficulty::ALL[i % Difficulty::ALL.len()],
                (constant * 10.0).round() / 10.0,
                &format!("{}", constant.floor()),
            )
        })
        .collect()
}
