//! Page and host wired together through a channel transport and a view
//! that loops evaluated scripts back into the page bridge.

use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use viewbridge::prelude::*;
use viewbridge::{inbound_call, parse_inbound_call};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Action {
    Init,
    SetSize { width: u32, height: u32 },
    SetGain { value: f32 },
}

/// Records evaluated scripts so the test can feed them to the page bridge
#[derive(Clone, Default)]
struct LoopbackView {
    scripts: Arc<Mutex<Vec<String>>>,
    size: Arc<Mutex<(u32, u32)>>,
}

impl NativeView for LoopbackView {
    fn evaluate_script(&self, script: &str) {
        self.scripts.lock().push(script.to_string());
    }

    fn set_size(&mut self, width: u32, height: u32) {
        *self.size.lock() = (width, height);
    }
}

impl LoopbackView {
    fn flush_into<T: HostTransport>(&self, page: &mut PageBridge<T>) -> BridgeResult<()> {
        let scripts: Vec<String> = self.scripts.lock().drain(..).collect();
        for script in scripts {
            let text = parse_inbound_call(&script)
                .ok_or_else(|| BridgeError::Internal(format!("unexpected script: {script}")))?;
            page.receive(&text)?;
        }
        Ok(())
    }
}

#[test]
fn page_and_host_exchange_messages() {
    let (transport, mut outbound) = ChannelTransport::new(TransportKind::Webkit);
    let mut page = PageBridge::new(transport);
    let received: Rc<RefCell<Vec<Message>>> = Rc::default();
    let sink = received.clone();
    page.set_handler(move |msg| sink.borrow_mut().push(msg));

    let options = ViewOptions::new(ViewSource::Html("<html></html>".into()), (200, 200))
        .with_transport(TransportKind::Webkit, "main");
    let view = LoopbackView::default();
    let mut host = HostContext::from_options(&options);
    host.attach_view(Box::new(view.clone()));

    // Page -> host
    page.send(&json!({"type": "init"})).unwrap();
    page.send(&json!({"type": "set_size", "width": 320, "height": 240}))
        .unwrap();
    while let Ok(text) = outbound.try_recv() {
        host.push_raw(&text).unwrap();
    }

    // Host event loop
    while let Some(event) = host.next_event() {
        match event.json_as::<Action>() {
            Some(Ok(Action::Init)) => {
                let (width, height) = host.size();
                host.send_json(&json!({"type": "set_size", "width": width, "height": height}))
                    .unwrap();
            }
            Some(Ok(Action::SetSize { width, height })) => host.resize(width, height).unwrap(),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    // Host -> page
    view.flush_into(&mut page).unwrap();

    assert_eq!(
        *received.borrow(),
        vec![json!({"type": "set_size", "width": 200, "height": 200})]
    );
    assert_eq!(host.size(), (320, 240));
    assert_eq!(*view.size.lock(), (320, 240));
}

#[test]
fn malformed_host_text_never_reaches_page_handler() {
    let (transport, _outbound) = ChannelTransport::new(TransportKind::Ipc);
    let mut page = PageBridge::new(transport);
    let received: Rc<RefCell<Vec<Message>>> = Rc::default();
    let sink = received.clone();
    page.set_handler(move |msg| sink.borrow_mut().push(msg));

    let text = parse_inbound_call(&inbound_call("not json")).unwrap();
    let result = page.receive(&text);

    assert!(matches!(result, Err(BridgeError::Deserialization(_))));
    assert!(received.borrow().is_empty());
}

#[test]
fn closed_host_channel_surfaces_transport_error() {
    let (transport, outbound) = ChannelTransport::new(TransportKind::Ipc);
    let page = PageBridge::new(transport);
    drop(outbound);

    let result = page.send(&json!({"type": "set_gain", "value": 0.25}));

    assert!(matches!(result, Err(BridgeError::Transport(_))));
}

#[test]
fn shared_context_collects_messages_from_view_callback() {
    let context = HostContext::new((1, 1)).into_shared();
    let on_message = inbound_callback(context.clone());
    let (transport, mut outbound) = ChannelTransport::new(TransportKind::Ipc);
    let page = PageBridge::new(transport);

    page.send(&json!({"type": "set_gain", "value": 0.5})).unwrap();
    while let Ok(text) = outbound.try_recv() {
        on_message(&text);
    }

    let events = context.lock().drain_events();
    let actions: Vec<Action> = events
        .iter()
        .filter_map(|event| event.json_as::<Action>())
        .collect::<BridgeResult<_>>()
        .unwrap();
    assert_eq!(actions, vec![Action::SetGain { value: 0.5 }]);
}
