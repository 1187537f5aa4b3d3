use byteringbuf::{RingBuffer, RingBufferError};

#[test]
fn test_peek_logical_order() {
    let mut rb = RingBuffer::<8>::new();
    rb.queue_array(b"abc");

    assert_eq!(rb.peek(0), Some(b'a'));
    assert_eq!(rb.peek(1), Some(b'b'));
    assert_eq!(rb.peek(2), Some(b'c'));
}

#[test]
fn test_peek_out_of_bounds() {
    let mut rb = RingBuffer::<8>::new();
    assert_eq!(rb.peek(0), None);

    rb.queue(1);
    assert_eq!(rb.peek(1), None);
    assert_eq!(rb.peek(8), None);
    assert_eq!(rb.peek(usize::MAX), None);
}

#[test]
fn test_peek_does_not_mutate() {
    let mut rb = RingBuffer::<4>::new();
    rb.queue_array(&[1, 2, 3, 4, 5, 6]);

    for _ in 0..10 {
        assert_eq!(rb.peek(0), Some(3));
        assert_eq!(rb.peek(3), Some(6));
    }
    assert_eq!(rb.num_items(), 4);
    assert!(rb.is_full());
    assert_eq!(rb.dequeue(), Some(3));
}

#[test]
fn test_peek_after_wraparound() {
    let mut rb = RingBuffer::<4>::new();
    rb.queue_array(&[1, 2, 3]);
    rb.dequeue();
    rb.dequeue();
    rb.queue_array(&[4, 5]);

    assert_eq!(rb.peek(0), Some(3));
    assert_eq!(rb.peek(1), Some(4));
    assert_eq!(rb.peek(2), Some(5));
    assert_eq!(rb.peek(3), None);
}

#[test]
fn test_try_peek() {
    let mut rb = RingBuffer::<4>::new();
    rb.queue_array(&[10, 20]);

    assert_eq!(rb.try_peek(1), Ok(20));
    assert_eq!(
        rb.try_peek(2),
        Err(RingBufferError::IndexOutOfBounds {
            index: 2,
            length: 2
        })
    );
}

#[test]
fn test_try_dequeue() {
    let mut rb = RingBuffer::<4>::new();
    rb.queue(7);

    assert_eq!(rb.try_dequeue(), Ok(7));
    assert_eq!(rb.try_dequeue(), Err(RingBufferError::Empty));
}

#[test]
fn test_search_prefers_most_recent() {
    let mut rb = RingBuffer::<8>::new();
    rb.queue_array(b"aba");

    assert_eq!(rb.search(b'a'), Some(2));
    assert_eq!(rb.search(b'b'), Some(1));
}

#[test]
fn test_search_absent_byte() {
    let mut rb = RingBuffer::<8>::new();
    rb.queue_array(b"abc");
    assert_eq!(rb.search(b'z'), None);
}

#[test]
fn test_search_empty_buffer() {
    let rb = RingBuffer::<8>::new();
    assert_eq!(rb.search(0), None);
}

#[test]
fn test_search_oldest_only_match() {
    let mut rb = RingBuffer::<8>::new();
    rb.queue_array(b"xyz");
    assert_eq!(rb.search(b'x'), Some(0));
}

#[test]
fn test_search_ignores_overwritten_bytes() {
    let mut rb = RingBuffer::<4>::new();
    rb.queue_array(b"qwert");

    assert_eq!(rb.search(b'q'), None);
    assert_eq!(rb.search(b'w'), Some(0));
    assert_eq!(rb.search(b't'), Some(3));
}

#[test]
fn test_search_ignores_dequeued_bytes() {
    let mut rb = RingBuffer::<8>::new();
    rb.queue_array(b"abc");
    rb.dequeue();
    assert_eq!(rb.search(b'a'), None);
    assert_eq!(rb.search(b'c'), Some(1));
}
