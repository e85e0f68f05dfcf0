use super::queries::{GET_RECENT_SESSIONS, INSERT_SESSION};
use crate::{Database, domain::SessionRecord};
use anyhow::Result;
use rusqlite::params;

impl Database {
    pub fn log_session(&mut self, record: &SessionRecord) -> Result<()> {
        self.conn.execute(
            INSERT_SESSION,
            params![
                record.routine_id,
                record.routine_name,
                record.steps_completed,
                record.seconds_worked as i64,
                record.finished_at
            ],
        )?;
        Ok(())
    }

    /// Newest first.
    pub fn recent_sessions(&mut self, limit: usize) -> Result<Vec<SessionRecord>> {
        let mut stmt = self.conn.prepare(GET_RECENT_SESSIONS)?;

        let rows = stmt.query_map(params![limit as i64], |r| {
            Ok(SessionRecord {
                routine_id: r.get(0)?,
                routine_name: r.get(1)?,
                steps_completed: r.get(2)?,
                seconds_worked: r.get::<_, i64>(3)? as u64,
                finished_at: r.get(4)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_come_back_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = Database::open_at(dir.path().join("test.db")).unwrap();

        for (i, name) in ["Legs", "Arms", "Core"].iter().enumerate() {
            let record = SessionRecord {
                routine_id: i as i64,
                routine_name: name.to_string(),
                steps_completed: 4,
                seconds_worked: 300,
                finished_at: 1_700_000_000 + i as i64,
            };
            db.log_session(&record).unwrap();
        }

        let recent = db.recent_sessions(2).unwrap();
        let names: Vec<_> = recent.iter().map(|r| r.routine_name.as_str()).collect();
        assert_eq!(names, vec!["Core", "Arms"]);
        assert_eq!(recent[0].seconds_worked, 300);
    }
}
