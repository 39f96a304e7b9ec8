//! The "generate game" question source: a built-in, pre-validated catalog
//! compiled into the binary, overridable by a JSON file named in the
//! configuration.

use std::fs;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{config::AppConfig, dao::models::QuestionEntity, state::game::Question};

/// Load the generated question set, preferring the configured override
/// file and falling back to the built-in catalog when it is missing or
/// malformed. Every entry comes back unused so a generated game starts
/// with a fresh board.
pub fn generated_catalog(config: &AppConfig) -> Vec<Question> {
    if let Some(path) = &config.generated_set_path {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Vec<QuestionEntity>>(&contents) {
                Ok(entities) => {
                    info!(path = %path.display(), count = entities.len(), "loaded generated question set");
                    return entities
                        .into_iter()
                        .map(|entity| Question {
                            used: false,
                            ..entity.into()
                        })
                        .collect();
                }
                Err(err) => warn!(
                    path = %path.display(),
                    error = %err,
                    "generated set file is malformed; using the built-in set"
                ),
            },
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "failed to read generated set file; using the built-in set"
            ),
        }
    }

    builtin_set()
}

fn question(category: &str, value: i64, prompt: &str, answer: &str) -> Question {
    Question {
        id: Uuid::new_v4(),
        category: category.into(),
        value,
        prompt: prompt.into(),
        answer: Some(answer.into()),
        answers: None,
        is_final: false,
        used: false,
        image: None,
        audio: None,
    }
}

/// Built-in generated game shipped with the binary: five categories of
/// five ascending values plus a Final Jeopardy entry.
fn builtin_set() -> Vec<Question> {
    let mut catalog = vec![
        question("Shonen Classics", 100, "This orange-clad ninja dreams of becoming Hokage.", "Naruto"),
        question("Shonen Classics", 200, "The Saiyan raised on Earth who first turned Super Saiyan against Frieza.", "Goku"),
        question("Shonen Classics", 300, "In this series, brothers Edward and Alphonse search for the Philosopher's Stone.", "Fullmetal Alchemist"),
        question("Shonen Classics", 400, "Captain of the Straw Hat Pirates.", "Monkey D. Luffy"),
        question("Shonen Classics", 500, "The Survey Corps soldier known as humanity's strongest, surname Ackerman.", "Levi"),
        question("Studio Ghibli", 100, "The 1988 film whose forest spirit has become the studio's logo.", "My Neighbor Totoro"),
        question("Studio Ghibli", 200, "Chihiro works in a bathhouse for spirits in this Oscar-winning film.", "Spirited Away"),
        question("Studio Ghibli", 300, "This film's delivery girl flies a broom with a black cat named Jiji.", "Kiki's Delivery Service"),
        question("Studio Ghibli", 400, "Howl's home in 'Howl's Moving Castle' walks on legs designed by this director.", "Hayao Miyazaki"),
        question("Studio Ghibli", 500, "The 1997 film where Ashitaka stands between Irontown and the forest gods.", "Princess Mononoke"),
        question("Openings", 100, "'A Cruel Angel's Thesis' opens this mecha series.", "Neon Genesis Evangelion"),
        question("Openings", 200, "'Gurenge' by LiSA opens this demon-hunting series.", "Demon Slayer"),
        question("Openings", 300, "'Tank!' by the Seatbelts opens this bounty-hunter space western.", "Cowboy Bebop"),
        question("Openings", 400, "'Unravel' opens this series about half-ghoul Ken Kaneki.", "Tokyo Ghoul"),
        question("Openings", 500, "'Again' by Yui opens the 2009 remake of this alchemy series.", "Fullmetal Alchemist: Brotherhood"),
        question("Famous Rivals", 100, "Naruto's brooding rival from the Uchiha clan.", "Sasuke"),
        question("Famous Rivals", 200, "Goku's Saiyan prince rival.", "Vegeta"),
        question("Famous Rivals", 300, "Light Yagami's detective adversary, known by a single letter.", "L"),
        question("Famous Rivals", 400, "Deku's explosive childhood friend and rival in 'My Hero Academia'.", "Katsuki Bakugo"),
        question("Famous Rivals", 500, "Guts' former commander and rival in 'Berserk'.", "Griffith"),
        question("Anime Food", 100, "Naruto's favorite noodle dish, served at Ichiraku.", "Ramen"),
        question("Anime Food", 200, "The bread Shokupan fans fight over in 'Yakitate!! Japan' is made from this grain staple.", "Wheat"),
        question("Anime Food", 300, "Soma Yukihira cooks his way through this elite culinary school.", "Totsuki"),
        question("Anime Food", 400, "The onigiri in 'Fruits Basket' hides behind this English name for the rice ball.", "Rice ball"),
        question("Anime Food", 500, "In 'Spirited Away', Chihiro's parents turn into these after eating spirit food.", "Pigs"),
    ];

    catalog.push(Question {
        is_final: true,
        ..question(
            "Final Jeopardy",
            0,
            "This studio, founded in 1985 by Miyazaki and Takahata, takes its name from a Saharan wind.",
            "Studio Ghibli",
        )
    });

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog;

    #[test]
    fn builtin_set_fills_a_complete_board() {
        let questions = builtin_set();
        let board = catalog::layout(&questions);

        assert_eq!(board.columns.len(), catalog::BOARD_CATEGORIES);
        for (_, cells) in &board.columns {
            assert!(cells.iter().all(Option::is_some));
        }
        assert!(board.final_question.is_some());
    }

    #[test]
    fn builtin_set_has_exactly_one_final() {
        let questions = builtin_set();
        assert_eq!(questions.iter().filter(|q| q.is_final).count(), 1);
        assert!(questions.iter().all(|q| !q.used));
    }

    #[test]
    fn missing_override_falls_back_to_builtin() {
        let config = AppConfig {
            generated_set_path: Some("does/not/exist.json".into()),
            ..AppConfig::default()
        };
        let questions = generated_catalog(&config);
        assert_eq!(questions.len(), builtin_set().len());
    }
}
