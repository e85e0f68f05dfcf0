use super::{
    RoutineImport,
    queries::{
        CLEAR_ROUTINE_STEPS, DELETE_ROUTINE, GET_EXERCISE_ID, GET_ROUTINE_ID, GET_ROUTINE_STEPS,
        GET_ROUTINES, INSERT_ROUTINE_STEP, UPSERT_EXERCISE, UPSERT_ROUTINE,
    },
};
use crate::{
    Database,
    domain::{ExerciseStep, Routine},
};
use anyhow::Result;
use rusqlite::params;
use std::collections::HashMap;
use tracing::info;

impl Database {
    /// Every routine with its steps in playback order.
    pub fn get_routines(&mut self) -> Result<Vec<Routine>> {
        let mut routines = {
            let mut stmt = self.conn.prepare(GET_ROUTINES)?;
            stmt.query_map([], |r| {
                Ok(Routine {
                    id: r.get("id")?,
                    name: r.get("name")?,
                    description: r.get("description")?,
                    steps: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?
        };

        let positions: HashMap<i64, usize> = routines
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id, idx))
            .collect();

        let mut stmt = self.conn.prepare(GET_ROUTINE_STEPS)?;
        let rows = stmt.query_map([], |r| {
            let routine_id: i64 = r.get(0)?;
            let step = ExerciseStep {
                id: r.get(1)?,
                name: r.get(2)?,
                description: r.get(3)?,
                duration_seconds: r.get(4)?,
                repetitions: r.get(5)?,
                sets: r.get(6)?,
            };
            Ok((routine_id, step))
        })?;

        for row in rows {
            let (routine_id, step) = row?;
            if let Some(&idx) = positions.get(&routine_id) {
                routines[idx].steps.push(step);
            }
        }

        Ok(routines)
    }

    /// Inserts or replaces routines by name. Steps of a replaced routine are
    /// rewritten in file order. Returns the number of routines written.
    pub fn import_routines(&mut self, import: &RoutineImport) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut upsert_routine = tx.prepare(UPSERT_ROUTINE)?;
            let mut routine_id = tx.prepare(GET_ROUTINE_ID)?;
            let mut upsert_exercise = tx.prepare(UPSERT_EXERCISE)?;
            let mut exercise_id = tx.prepare(GET_EXERCISE_ID)?;
            let mut clear_steps = tx.prepare(CLEAR_ROUTINE_STEPS)?;
            let mut insert_step = tx.prepare(INSERT_ROUTINE_STEP)?;

            for routine in &import.routines {
                upsert_routine.execute(params![routine.name, routine.description])?;
                let r_id: i64 = routine_id.query_row(params![routine.name], |r| r.get(0))?;
                clear_steps.execute(params![r_id])?;

                for (position, step) in routine.steps.iter().enumerate() {
                    upsert_exercise.execute(params![step.name, step.description])?;
                    let e_id: i64 = exercise_id.query_row(params![step.name], |r| r.get(0))?;

                    insert_step.execute(params![
                        r_id,
                        position as i64,
                        e_id,
                        step.duration_seconds,
                        step.repetitions,
                        step.sets
                    ])?;
                }
            }
        }
        tx.commit()?;

        info!(count = import.routines.len(), "imported routines");
        Ok(import.routines.len())
    }

    pub fn delete_routine(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_ROUTINE, params![id])?;
        Ok(())
    }
}
