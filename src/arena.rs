//! Chunked node storage addressed by stable handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A stable reference to a slot in a `TypedArena<T>`.
///
/// A handle stays valid until its slot is freed. Slots are recycled, so a freed handle may later
/// address an unrelated object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
}

#[derive(Clone)]
enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator for a single type of object.
///
/// Objects live in fixed-size chunks that are allocated on demand and never reallocated, so no
/// object moves once it is placed. Freed slots are threaded onto a free list and reused before a
/// new chunk is allocated. Every object is dropped when the arena is dropped or cleared. Cloning
/// the arena clones every live object into the same slots, so handles into the original address
/// the corresponding objects of the copy.
#[derive(Clone)]
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn block(&self, handle: Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    fn block_mut(&mut self, handle: Handle) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index))
    }

    /// Constructs a new, empty `TypedArena<T>` holding `chunk_size` objects per chunk.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Expected a positive chunk size.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Places an object in the arena and returns its handle.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(handle) = self.head.take() {
            let vacant_block = mem::replace(
                &mut self.chunks[handle.chunk_index][handle.block_index],
                Block::Occupied(value),
            );
            match vacant_block {
                Block::Vacant(next) => self.head = next,
                Block::Occupied(_) => unreachable!(),
            }
            return handle;
        }

        if self.len > self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        let chunk_index = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk_index];
        last_chunk.push(Block::Occupied(value));
        Handle {
            chunk_index,
            block_index: last_chunk.len() - 1,
        }
    }

    /// Removes an object from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not address a live object.
    pub fn free(&mut self, handle: Handle) -> T {
        let next = self.head;
        let block = self
            .block_mut(handle)
            .expect("Expected a handle into the arena.");
        match mem::replace(block, Block::Vacant(next)) {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
            Block::Vacant(next) => {
                *block = Block::Vacant(next);
                panic!("Expected a handle to an occupied block.");
            },
        }
    }

    /// Drops every object and releases every chunk.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }

    /// Returns an immutable reference to an object, or `None` if the handle does not address a
    /// live object.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if the handle does not address a live
    /// object.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.block_mut(handle) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Expected a handle to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle)
            .expect("Expected a handle to a live object.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Handle, TypedArena};

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new(1024);
        arena.free(Handle {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        arena.free(handle);
        arena.free(handle);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = TypedArena::new(2);
        let handles = (0..3).map(|value| arena.allocate(value)).collect::<Vec<Handle>>();
        assert_eq!(
            handles[2],
            Handle {
                chunk_index: 1,
                block_index: 0,
            },
        );
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[handles[1]], 1);
    }

    #[test]
    fn test_free_recycles_slot() {
        let mut arena = TypedArena::new(1024);
        let first = arena.allocate(0);
        let second = arena.allocate(1);
        assert_eq!(arena.free(first), 0);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(2), first);
        assert_eq!(arena[first], 2);
        assert_eq!(arena[second], 1);
    }

    #[test]
    fn test_recycled_slots_do_not_grow_chunks() {
        let mut arena = TypedArena::new(2);
        let first = arena.allocate(0);
        arena.allocate(1);
        arena.free(first);
        let recycled = arena.allocate(2);
        assert_eq!(recycled, first);
        let fresh = arena.allocate(3);
        assert_eq!(
            fresh,
            Handle {
                chunk_index: 1,
                block_index: 0,
            },
        );
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        arena.free(handle);
        assert_eq!(arena.get(handle), None);
        assert_eq!(arena.get_mut(handle), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new(1024);
        let handle = arena.allocate(0);
        arena[handle] += 1;
        assert_eq!(arena.get(handle), Some(&1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut arena = TypedArena::new(4);
        let handle = arena.allocate(String::from("a"));
        let mut copy = arena.clone();
        copy[handle].push('b');
        assert_eq!(arena[handle], "a");
        assert_eq!(copy[handle], "ab");
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new(4);
        let handle = arena.allocate(0);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(handle), None);
    }
}
