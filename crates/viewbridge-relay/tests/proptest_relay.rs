//! Property-based tests for the page relay
//!
//! Whatever the page sends, feeding the posted text back through `receive`
//! runs the handler exactly once with an equal value.

use proptest::prelude::*;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use viewbridge_relay::PageBridge;
use viewbridge_transport::IpcPostMessage;

fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
            .prop_map(Value::from),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((any::<String>(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

type Posted = Rc<RefCell<Vec<String>>>;
type Received = Rc<RefCell<Vec<Value>>>;

fn looped_bridge() -> (PageBridge<IpcPostMessage>, Posted, Received) {
    let posted: Posted = Rc::default();
    let outbox = posted.clone();
    let mut bridge = PageBridge::new(IpcPostMessage::new(move |text| {
        outbox.borrow_mut().push(text.to_string())
    }));

    let received: Received = Rc::default();
    let inbox = received.clone();
    bridge.set_handler(move |message| inbox.borrow_mut().push(message));

    (bridge, posted, received)
}

proptest! {
    /// Property: receive(serialize(m)) dispatches m exactly once
    #[test]
    fn proptest_receive_dispatches_equal_value_once(message in arb_json_value()) {
        let (mut bridge, _, received) = looped_bridge();
        let text = serde_json::to_string(&message).expect("JSON values always serialize");

        bridge.receive(&text).expect("serialized text always decodes");

        prop_assert_eq!(&*received.borrow(), &vec![message]);
    }

    /// Property: text posted by send is accepted back by receive unchanged
    #[test]
    fn proptest_send_then_receive_roundtrips(message in arb_json_value()) {
        let (mut bridge, posted, received) = looped_bridge();

        bridge.send(&message).expect("JSON values always encode");
        let text = posted.borrow_mut().pop().expect("send posts exactly one text");
        bridge.receive(&text).expect("posted text always decodes");

        prop_assert!(posted.borrow().is_empty());
        prop_assert_eq!(&*received.borrow(), &vec![message]);
    }
}
