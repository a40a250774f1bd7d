use std::fmt;

use chrono::{DateTime, Duration, Utc};
use diesel::{self, Connection, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Choice, NewChoice};
use crate::schema::{choices, questions};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion<'a> {
    pub question_text: &'a str,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Inserts the question, published now, and one choice per text in a single transaction.
    pub fn create_with_choices(
        conn: &PgConnection,
        question_text: &str,
        choice_texts: &[String],
    ) -> Result<(Question, Vec<Choice>), Error> {
        conn.transaction::<_, Error, _>(|| {
            let question = Question::create(conn, question_text, Utc::now())?;

            let new_choices: Vec<NewChoice> = choice_texts
                .iter()
                .map(|choice_text| NewChoice {
                    question_id: question.id,
                    choice_text,
                })
                .collect();

            let created: Vec<Choice> = diesel::insert_into(choices::table)
                .values(&new_choices)
                .get_results(conn)?;

            Ok((question, created))
        })
    }

    pub fn find_published(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions as questions_table};

        let question = questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now))
            .first::<Question>(conn)?;

        Ok(question)
    }

    pub fn latest_published(
        conn: &PgConnection,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order((pub_date.desc(), id.asc()))
            .limit(limit)
            .load::<Question>(conn)?;

        Ok(results)
    }

    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.question_text, self.pub_date)
    }
}
