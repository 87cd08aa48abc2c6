//! The fixed board-game export queries.
//!
//! The page query joins `board_game` with its rank row and three
//! GROUP_CONCAT subselects producing alphabetized, comma-joined lists of
//! category, mechanic and publisher names. `rank` is a reserved word in
//! MySQL 8, hence the backticks.

/// Count query used for completion accounting
pub const COUNT_SQL: &str = "SELECT COUNT(*) FROM board_game";

/// Build the page query for one chunk, ordered by rank
pub fn page_sql(limit: u64, offset: u64) -> String {
    format!(
        r#"SELECT
    bg.id,
    bg.name,
    bg.year_published,
    bg.min_players,
    bg.max_players,
    bg.age,
    bg.average_weight,
    bg.playing_time,
    bg.min_playing_time,
    bg.max_playing_time,
    bg.description,
    bg.thumbnail,
    bg.image,
    bg.average,
    bg.bayes_average,
    bg.users_rated,
    bg.old_rank,
    gr.game_rank AS `rank`,
    (
        SELECT GROUP_CONCAT(DISTINCT c.name ORDER BY c.name ASC SEPARATOR ', ')
        FROM categories c
        JOIN board_game_has_categories bgc ON c.id = bgc.category_id
        WHERE bgc.board_game_id = bg.id
    ) AS categories,
    (
        SELECT GROUP_CONCAT(DISTINCT m.name ORDER BY m.name ASC SEPARATOR ', ')
        FROM mechanics m
        JOIN board_game_has_mechanics bgm ON m.id = bgm.mechanic_id
        WHERE bgm.board_game_id = bg.id
    ) AS mechanics,
    (
        SELECT GROUP_CONCAT(DISTINCT p.name ORDER BY p.name ASC SEPARATOR ', ')
        FROM publishers p
        JOIN board_game_has_publishers bgp ON p.id = bgp.publisher_id
        WHERE bgp.board_game_id = bg.id
    ) AS publishers
FROM
    board_game bg
LEFT JOIN
    game_rank gr ON bg.id = gr.board_game_id
ORDER BY
    `rank` ASC
LIMIT {limit} OFFSET {offset}"#
    )
}
