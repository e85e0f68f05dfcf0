pub const CREATE_TABLES: &str = r"
    CREATE TABLE IF NOT EXISTS routines(
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );

    CREATE TABLE IF NOT EXISTS exercises(
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );

    CREATE TABLE IF NOT EXISTS routine_steps(
        routine_id INTEGER NOT NULL,
        position INTEGER NOT NULL,
        exercise_id INTEGER NOT NULL,
        duration INTEGER,
        repetitions INTEGER,
        sets INTEGER,
        PRIMARY KEY(routine_id, position),
        FOREIGN KEY(routine_id) REFERENCES routines(id) ON DELETE CASCADE,
        FOREIGN KEY(exercise_id) REFERENCES exercises(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS session_log(
        id INTEGER PRIMARY KEY,
        routine_id INTEGER NOT NULL,
        routine_name TEXT NOT NULL,
        steps_completed INTEGER NOT NULL,
        seconds_worked INTEGER NOT NULL,
        finished_at INTEGER NOT NULL
    );
";
