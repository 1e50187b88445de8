use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionSession, TransactionTrait,
};

use crate::entity::{dish, vote};
use crate::error::AppError;
use crate::models::dish::DishResponse;
use crate::models::vote::MenuItem;

use super::dish::DishService;

pub struct VoteService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> VoteService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Sum the likes each dish received on `date` (UTC). Dishes nobody voted
    /// for that day are left out; the rest appear in first-vote order.
    pub async fn aggregate_by_day(&self, date: NaiveDate) -> Result<Vec<MenuItem>, AppError> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + TimeDelta::days(1);

        let rows = vote::Entity::find()
            .filter(vote::Column::Time.gte(start))
            .filter(vote::Column::Time.lt(end))
            .order_by_asc(vote::Column::Id)
            .find_also_related(dish::Entity)
            .all(self.conn)
            .await?;

        Ok(tally_votes(rows.into_iter().filter_map(|(vote, dish)| {
            dish.map(|dish| (vote.number, DishResponse::from(dish)))
        })))
    }
}

impl<C: ConnectionTrait + TransactionTrait> VoteService<'_, C> {
    /// Record `number` likes for a dish, stamped with the current time.
    pub async fn record_vote(&self, dish_id: i32, number: i32) -> Result<vote::Model, AppError> {
        self.record_vote_at(dish_id, number, Utc::now()).await
    }

    /// The dish lookup and the insert share one transaction, so a concurrent
    /// delete surfaces as `NotFound` rather than a foreign-key failure.
    pub async fn record_vote_at(
        &self,
        dish_id: i32,
        number: i32,
        at: DateTime<Utc>,
    ) -> Result<vote::Model, AppError> {
        let txn = self.conn.begin().await?;
        DishService::new(&txn).find(dish_id).await?;

        let vote = vote::ActiveModel {
            time: Set(at),
            number: Set(number),
            delicious_id: Set(dish_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(vote)
    }
}

/// Group `(number, dish)` pairs by dish id, summing `number`.
pub fn tally_votes<I>(votes: I) -> Vec<MenuItem>
where
    I: IntoIterator<Item = (i32, DishResponse)>,
{
    let mut positions: HashMap<i32, usize> = HashMap::new();
    let mut items: Vec<MenuItem> = Vec::new();

    for (number, dish) in votes {
        let idx = *positions.entry(dish.id).or_insert_with(|| {
            items.push(MenuItem {
                dish,
                vote_count: 0,
            });
            items.len() - 1
        });
        items[idx].vote_count += i64::from(number);
    }

    items
}
