use super::pattern::{rotation_pattern, Slot};
use super::{util, RotationGenerator, SchedError};
use crate::model::{Assignment, Schedule};
use chrono::NaiveDate;
use tracing::{debug, info};

pub(super) fn generate(
    generator: &RotationGenerator,
    start: NaiveDate,
    cycles: u32,
) -> Result<Schedule, SchedError> {
    if cycles == 0 {
        return Err(SchedError::InvalidCycles);
    }
    let config = &generator.config;
    let total_days = cycles
        .checked_mul(config.cycle_days)
        .ok_or(SchedError::DateOverflow)?;
    // dernière date atteinte, vérifiée avant toute génération
    util::add_days(start, total_days as usize - 1)?;

    let pool_size = generator.pool_size();
    let pattern = rotation_pattern(config, pool_size);
    debug!(
        %start,
        cycles,
        total_days,
        pool_size,
        pattern_len = pattern.len(),
        "generating rotation"
    );

    let mut schedule = Schedule::new();
    for day_offset in 0..total_days as usize {
        let current = util::add_days(start, day_offset)?;
        for shift_index in 0..config.shift_kinds.len() {
            let Slot::Shift(kind_index) = pattern[(day_offset + shift_index) % pattern.len()]
            else {
                continue;
            };
            let kind = &config.shift_kinds[kind_index];
            let worker = generator.worker_at(day_offset, shift_index);
            schedule.push(
                current,
                Assignment {
                    worker_id: worker.id.clone(),
                    worker_name: worker.name.clone(),
                    shift_type: kind.name.clone(),
                    start_time: kind.start_time(),
                    end_time: kind.end_time(),
                },
            );
        }
    }

    info!(
        days = total_days,
        assignments = schedule.assignment_count(),
        "rotation generated"
    );
    Ok(schedule)
}
