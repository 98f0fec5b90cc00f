use log::{debug, warn};

use crate::{
    Block, BlockType, CreateError, DayTemplate, ExerciseAssignment, ExerciseID,
    ExerciseRepository, GenerateError, Name, NewBlock, NewExercise, NewSession, Session,
    SessionExercise, SessionKey, SessionRepository, Stage, Track, Week, session_name,
};

/// Converts the planned blocks of one day into rows and replaces the stored session.
///
/// Assignments whose exercise can not be resolved in the catalog are skipped. A block other
/// than the warm-up that ends up without assignments aborts the session before anything is
/// written.
pub fn write_session<R>(
    repository: &R,
    track: &Track,
    week: Week,
    day: &DayTemplate,
    blocks: Vec<Block>,
) -> Result<Session, GenerateError>
where
    R: ExerciseRepository + SessionRepository,
{
    let mut new_blocks = Vec::with_capacity(blocks.len());

    for block in blocks {
        let mut exercises = vec![];
        let mut sequence = 0;
        for assignment in &block.exercises {
            let Some(exercise_id) = resolve_exercise(repository, assignment) else {
                continue;
            };
            sequence += 1;
            exercises.push(SessionExercise {
                exercise_id,
                sequence,
                sets: assignment.sets,
                reps: assignment.reps.clone(),
                duration_seconds: assignment.duration_seconds,
                load: assignment.load,
                rest_seconds: assignment.rest_seconds,
                notes: assignment.notes.clone(),
                scaling_notes: assignment.scaling_notes.clone(),
            });
        }

        if exercises.is_empty() && block.block_type != BlockType::WarmUp {
            return Err(GenerateError::IncompleteBlock {
                track: track.slug.clone(),
                week: *week,
                day: day.day,
                block: block.name,
            });
        }

        new_blocks.push(NewBlock {
            block_type: block.block_type,
            name: Name::new(&block.name)?,
            sequence: block.sequence,
            duration_minutes: block.duration_minutes,
            exercises,
        });
    }

    let session = NewSession {
        key: SessionKey {
            track_id: track.id,
            week,
            day: day.day,
            sub_session: day.sub_session,
        },
        name: Name::new(&session_name(week, day.day, day.focus, day.sub_session))?,
        focus: day.focus,
        session_type: day.session_type,
        duration_minutes: day.duration_minutes,
        intensity: day.intensity,
        published: true,
        blocks: new_blocks,
    };

    repository
        .replace_session(session)
        .map_err(|err| GenerateError::storage(&track.slug, Stage::ReplaceSession, err.into()))
}

/// Looks up the catalog entry for an assignment, creating it on first use.
fn resolve_exercise<R: ExerciseRepository>(
    repository: &R,
    assignment: &ExerciseAssignment,
) -> Option<ExerciseID> {
    let name = match Name::new(&assignment.exercise_name) {
        Ok(name) => name,
        Err(err) => {
            warn!("skipping exercise \"{}\": {err}", assignment.exercise_name);
            return None;
        }
    };

    let query = name.to_string();
    match repository.find_exercise(&query) {
        Ok(Some(exercise)) => {
            if !exercise.name.eq_ignore_case(&query) {
                warn!(
                    "using catalog exercise \"{}\" for \"{name}\"",
                    exercise.name
                );
            }
            Some(exercise.id)
        }
        Ok(None) => {
            match repository.create_exercise(NewExercise::placeholder(
                name.clone(),
                assignment.category,
            )) {
                Ok(exercise) => {
                    debug!("created catalog exercise \"{}\"", exercise.name);
                    Some(exercise.id)
                }
                Err(CreateError::Conflict) => match repository.find_exercise(&query) {
                    Ok(Some(exercise)) => {
                        debug!("using concurrently created catalog exercise \"{name}\"");
                        Some(exercise.id)
                    }
                    Ok(None) => {
                        warn!("skipping exercise \"{name}\": conflicting catalog entry not found");
                        None
                    }
                    Err(err) => {
                        warn!("skipping exercise \"{name}\": failed to look up catalog: {err}");
                        None
                    }
                },
                Err(err) => {
                    warn!("skipping exercise \"{name}\": failed to create catalog entry: {err}");
                    None
                }
            }
        }
        Err(err) => {
            warn!("skipping exercise \"{name}\": failed to look up catalog: {err}");
            None
        }
    }
}
