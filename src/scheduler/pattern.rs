use crate::config::RotationConfig;

/// Symbole du motif de rotation : index dans la table des quarts, ou repos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Shift(usize),
    Off,
}

/// Bloc de base : la table des quarts deux fois, puis `off_slots` repos.
pub fn base_block(config: &RotationConfig) -> Vec<Slot> {
    let kinds = config.shift_kinds.len();
    (0..2)
        .flat_map(|_| (0..kinds).map(Slot::Shift))
        .chain((0..config.off_slots).map(|_| Slot::Off))
        .collect()
}

/// Motif complet, répété `ceil(pool_size / bloc) + 1` fois.
pub fn rotation_pattern(config: &RotationConfig, pool_size: usize) -> Vec<Slot> {
    let block = base_block(config);
    let repeats = pool_size.div_ceil(block.len()) + 1;
    let mut pattern = Vec::with_capacity(block.len() * repeats);
    for _ in 0..repeats {
        pattern.extend_from_slice(&block);
    }
    pattern
}
