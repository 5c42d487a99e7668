use soroban_sdk::{unwrap::UnwrapOptimized, BytesN, Env, Vec};

use crate::storage::{
    get_position, get_queue_index, remove_position, save_queue_index, set_position,
};

/// Append an id to the back of the FIFO index and record its slot.
pub fn append(env: &Env, id: &BytesN<32>) {
    let mut index = get_queue_index(env);
    let position = index.len();
    index.push_back(id.clone());
    save_queue_index(env, &index);
    set_position(env, id, position);
}

/// Remove an id from the FIFO index in O(1) by swapping the victim's slot
/// with the last entry, fixing the moved entry's recorded position, then
/// truncating. Maintains `index[position[id]] == id` for every live id,
/// including the last-element and only-element cases where no swap happens.
pub fn remove(env: &Env, id: &BytesN<32>) {
    let position = match get_position(env, id) {
        Some(position) => position,
        // Not in the index; nothing to do.
        None => return,
    };

    let mut index = get_queue_index(env);
    let last = index.len() - 1;
    if position != last {
        let moved = index.get(last).unwrap_optimized();
        index.set(position, moved.clone());
        set_position(env, &moved, position);
    }
    index.pop_back();
    save_queue_index(env, &index);
    remove_position(env, id);
}

pub fn depth(env: &Env) -> u32 {
    get_queue_index(env).len()
}

/// Copy up to `cap` ids from the front of the index. Callers that remove
/// entries while iterating scan this copy so the swap-remove backfill cannot
/// change which ids get visited.
pub fn snapshot_front(env: &Env, cap: u32) -> Vec<BytesN<32>> {
    let index = get_queue_index(env);
    let take = cap.min(index.len());
    let mut front = Vec::new(env);
    for slot in 0..take {
        front.push_back(index.get(slot).unwrap_optimized());
    }
    front
}
