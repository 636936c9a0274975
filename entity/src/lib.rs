pub mod hero;
pub mod hero_power;
pub mod power;

/*
 Heroes and powers are seeded, never created over HTTP.
 hero_powers is the join table, each row carries a strength rating.
 Deleting either parent removes its hero_powers rows (FK cascade + explicit delete in the txn).
 */
