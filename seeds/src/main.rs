use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    let polls: &[(&str, &[&str], i64)] = &[
        ("What's new?", &["Not much", "The sky", "Just hacking again"], 3),
        (
            "Best way to brew coffee?",
            &["Pour over", "French press", "Espresso", "Instant"],
            1,
        ),
        ("Tabs or spaces?", &["Tabs", "Spaces"], 0),
    ];

    for (question_text, choices, days_ago) in polls {
        let pub_date = Utc::now() - Duration::days(*days_ago);
        let question = Question::create(&conn, question_text, pub_date).unwrap();

        for choice_text in choices.iter() {
            Choice::create(&conn, question.id, choice_text).unwrap();
        }
    }
}
