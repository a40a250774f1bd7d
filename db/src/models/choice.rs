use std::fmt;

use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice<'a> {
    pub question_id: i32,
    pub choice_text: &'a str,
}

impl Choice {
    pub fn create(conn: &PgConnection, question_id: i32, choice_text: &str) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_id(conn: &PgConnection, choice_id: i32) -> Result<Choice, Error> {
        let choice = choices::table.find(choice_id).first::<Choice>(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(conn: &PgConnection, question_id: i32) -> Result<Vec<Choice>, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote server side. A choice id that does not belong to `question_id`
    /// matches no row and yields `Error::NotFound`.
    pub fn increment_votes(
        conn: &PgConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result::<Choice>(conn)?;

        Ok(choice)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.choice_text, self.votes)
    }
}
