use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::pages::IndexPage;

pub const LATEST_QUESTIONS: i64 = 5;

pub async fn index(pool: Data<PgPool>) -> Result<Json<IndexPage>, Error> {
    let connection = get_conn(&pool)?;

    let res = block(move || {
        Question::latest_published(&connection, Utc::now(), LATEST_QUESTIONS)
    })
    .await?;

    Ok(Json(IndexPage::new(res?)))
}

#[cfg(test)]
mod tests {
    use db::models::Question;

    use crate::pages::{IndexPage, NO_POLLS_MESSAGE};
    use crate::tests::helpers::tests::{create_offset_question, get_pool, reset_db, test_get};

    fn ids(questions: &[Question]) -> Vec<i32> {
        questions.iter().map(|q| q.id).collect()
    }

    async fn listed_ids() -> Vec<i32> {
        let (status, page): (u16, IndexPage) = test_get("/", None).await;
        assert_eq!(status, 200);
        match page {
            IndexPage::Polls { questions } => ids(&questions),
            IndexPage::Empty { .. } => vec![],
        }
    }

    #[actix_rt::test]
    async fn test_no_questions() {
        let pool = get_pool();
        reset_db(&pool);

        let (status, page): (u16, IndexPage) = test_get("/", None).await;
        assert_eq!(status, 200);

        match page {
            IndexPage::Empty { message } => assert_eq!(message, NO_POLLS_MESSAGE),
            other => panic!("expected the empty state, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_question_sorting() {
        let pool = get_pool();
        let conn = reset_db(&pool);

        let question1 = create_offset_question(&conn, "question 1", -3);
        let question2 = create_offset_question(&conn, "question 2", -2);
        let question3 = create_offset_question(&conn, "question 3", -1);

        assert_eq!(
            listed_ids().await,
            ids(&[question3, question2, question1])
        );

        reset_db(&pool);
    }

    #[actix_rt::test]
    async fn test_question_limit() {
        let pool = get_pool();
        let conn = reset_db(&pool);

        let created: Vec<Question> = (1..=6)
            .map(|n| create_offset_question(&conn, &format!("question {}", n), n - 7))
            .collect();

        let expected: Vec<i32> = created.iter().rev().take(5).map(|q| q.id).collect();
        assert_eq!(listed_ids().await, expected);

        reset_db(&pool);
    }

    #[actix_rt::test]
    async fn test_future_questions_only() {
        let pool = get_pool();
        let conn = reset_db(&pool);

        create_offset_question(&conn, "question 1", 3);

        let (status, page): (u16, IndexPage) = test_get("/", None).await;
        assert_eq!(status, 200);
        assert!(matches!(page, IndexPage::Empty { .. }));

        reset_db(&pool);
    }

    #[actix_rt::test]
    async fn test_past_and_future_questions() {
        let pool = get_pool();
        let conn = reset_db(&pool);

        let past1 = create_offset_question(&conn, "question 1", -3);
        let past2 = create_offset_question(&conn, "question 2", -4);
        create_offset_question(&conn, "question 3", 3);
        create_offset_question(&conn, "question 4", 5);

        assert_eq!(listed_ids().await, ids(&[past1, past2]));

        reset_db(&pool);
    }
}
