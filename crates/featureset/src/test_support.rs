use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{Feature, FeatureError, FeatureFactory, FeaturePresentation, HostContext};

/// Calls observed on mock presentations.
#[derive(Debug, Default)]
pub struct Journal {
    /// Names of destroyed presentations, in teardown order.
    pub destroyed: Vec<String>,
    /// Blobs handed to `deserialize`, with the instance URI.
    pub restored: Vec<(String, Vec<u8>)>,
}

pub type SharedJournal = Rc<RefCell<Journal>>;

pub struct MockFeature {
    uri: String,
    pub state: Vec<u8>,
}

impl MockFeature {
    pub fn boxed(uri: &str) -> Box<dyn Feature> {
        Box::new(Self {
            uri: uri.to_owned(),
            state: Vec::new(),
        })
    }
}

impl Feature for MockFeature {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn serialize(&self) -> Vec<u8> {
        self.state.clone()
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError> {
        self.state = data.to_vec();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub struct MockPresentation {
    uri: String,
    name: String,
    state: Vec<u8>,
    reject: bool,
    journal: SharedJournal,
}

impl MockPresentation {
    pub fn boxed(uri: &str, journal: &SharedJournal) -> Box<dyn FeaturePresentation> {
        Box::new(Self {
            uri: uri.to_owned(),
            name: String::new(),
            state: uri.as_bytes().to_vec(),
            reject: false,
            journal: Rc::clone(journal),
        })
    }
}

impl FeaturePresentation for MockPresentation {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&self) -> Vec<u8> {
        self.state.clone()
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<(), FeatureError> {
        if self.reject {
            return Err(FeatureError::InvalidConfig(format!("{} rejects config", self.uri)));
        }
        self.state = data.to_vec();
        self.journal
            .borrow_mut()
            .restored
            .push((self.uri.clone(), data.to_vec()));
        Ok(())
    }

    fn destroy(self: Box<Self>) {
        self.journal.borrow_mut().destroyed.push(self.name.clone());
    }
}

pub struct MockFactory {
    uri: String,
    headless: bool,
    reject: bool,
    journal: SharedJournal,
}

impl MockFactory {
    pub fn new(uri: &str) -> Self {
        Self::with_journal(uri, &SharedJournal::default())
    }

    pub fn with_journal(uri: &str, journal: &SharedJournal) -> Self {
        Self {
            uri: uri.to_owned(),
            headless: false,
            reject: false,
            journal: Rc::clone(journal),
        }
    }

    pub fn headless(mut self) -> Self {
        self.headless = true;
        self
    }

    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }
}

impl FeatureFactory for MockFactory {
    fn create_feature(&self, _context: &HostContext) -> Box<dyn Feature> {
        MockFeature::boxed(&self.uri)
    }

    fn create_presentation(
        &self,
        _context: &HostContext,
        feature: &mut dyn Feature,
    ) -> Option<Box<dyn FeaturePresentation>> {
        if self.headless {
            return None;
        }
        Some(Box::new(MockPresentation {
            uri: feature.uri().to_owned(),
            name: String::new(),
            state: Vec::new(),
            reject: self.reject,
            journal: Rc::clone(&self.journal),
        }))
    }
}
