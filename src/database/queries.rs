pub const GET_ROUTINES: &str = "
    SELECT id, name, description
    FROM routines
    ORDER BY name ASC
";

pub const GET_ROUTINE_STEPS: &str = "
    SELECT
        rs.routine_id,
        e.id,
        e.name,
        e.description,
        rs.duration,
        rs.repetitions,
        rs.sets
    FROM routine_steps rs
    INNER JOIN exercises e ON e.id = rs.exercise_id
    ORDER BY
        rs.routine_id ASC,
        rs.position ASC
";

pub const UPSERT_ROUTINE: &str = "
    INSERT INTO routines (name, description)
    VALUES (?1, ?2)
    ON CONFLICT(name) DO UPDATE SET
        description = excluded.description
";

pub const GET_ROUTINE_ID: &str = "
    SELECT id FROM routines WHERE name = ?
";

// Blank descriptions never overwrite an existing one
pub const UPSERT_EXERCISE: &str = "
    INSERT INTO exercises (name, description)
    VALUES (?1, ?2)
    ON CONFLICT(name) DO UPDATE SET
        description = CASE
            WHEN excluded.description = '' THEN exercises.description
            ELSE excluded.description
        END
";

pub const GET_EXERCISE_ID: &str = "
    SELECT id FROM exercises WHERE name = ?
";

pub const CLEAR_ROUTINE_STEPS: &str = "
    DELETE FROM routine_steps WHERE routine_id = ?
";

pub const INSERT_ROUTINE_STEP: &str = "
    INSERT INTO routine_steps (
        routine_id,
        position,
        exercise_id,
        duration,
        repetitions,
        sets
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

pub const DELETE_ROUTINE: &str = "
    DELETE FROM routines WHERE id = ?
";

pub const INSERT_SESSION: &str = "
    INSERT INTO session_log (
        routine_id,
        routine_name,
        steps_completed,
        seconds_worked,
        finished_at
    ) VALUES (?1, ?2, ?3, ?4, ?5)
";

pub const GET_RECENT_SESSIONS: &str = "
    SELECT routine_id, routine_name, steps_completed, seconds_worked, finished_at
    FROM session_log
    ORDER BY finished_at DESC, id DESC
    LIMIT ?
";
