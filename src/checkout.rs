//! Four-step checkout flow.
//!
//! The flow walks `Identity → Address → Payment` with free back/forward
//! navigation, then reaches `Confirmation` only through a successful
//! submission. Submission is a saga of dependent backend writes with no
//! compensation: a guest account or address created before a later
//! failure is left in place.

use std::sync::Arc;

use crate::client::ClientError;
use crate::lookup::PostalLookup;
use crate::resources::{
    Customer, CustomersApi, NewAddress, Order, OrderDraft, OrdersApi, Registration,
};
use crate::storage::guest_password;
use crate::stores::{CartStore, CustomerStore};

/// Position in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    /// Contact details.
    Identity,
    /// Shipping address.
    Address,
    /// Payment method and review.
    Payment,
    /// Order placed; terminal.
    Confirmation,
}

impl CheckoutStep {
    /// One-based step number shown in the UI.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Address => 2,
            Self::Payment => 3,
            Self::Confirmation => 4,
        }
    }
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    /// Instant bank transfer.
    #[default]
    Pix,
    /// Card payment.
    CreditCard,
    /// Bank slip.
    Boleto,
}

impl PaymentMethod {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::CreditCard => "credit_card",
            Self::Boleto => "boleto",
        }
    }
}

/// Shipping address being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    /// Street and number.
    pub address_line_1: String,
    /// Complement.
    pub address_line_2: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
}

/// Everything the visitor has typed so far. In-memory only; discarded
/// with the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDraft {
    /// Contact email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone.
    pub phone: String,
    /// Shipping address.
    pub address: AddressDraft,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Free-form notes for the order.
    pub notes: String,
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Drives one visitor through checkout.
///
/// Owned by the view for the duration of the flow; it is not shared
/// state and carries no subscribers of its own.
#[derive(Debug)]
pub struct Checkout {
    customers: CustomersApi,
    orders: OrdersApi,
    customer_store: Arc<CustomerStore>,
    cart_store: Arc<CartStore>,
    lookup: PostalLookup,
    step: CheckoutStep,
    /// Form state, edited directly by the view between steps.
    pub draft: CheckoutDraft,
}

impl Checkout {
    pub(crate) fn new(
        customers: CustomersApi,
        orders: OrdersApi,
        customer_store: Arc<CustomerStore>,
        cart_store: Arc<CartStore>,
        lookup: PostalLookup,
    ) -> Self {
        Self {
            customers,
            orders,
            customer_store,
            cart_store,
            lookup,
            step: CheckoutStep::Identity,
            draft: CheckoutDraft::default(),
        }
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Advances one step, never past [`CheckoutStep::Payment`].
    ///
    /// [`CheckoutStep::Confirmation`] is reachable only through
    /// [`submit`](Self::submit).
    pub fn next(&mut self) {
        self.step = match self.step {
            CheckoutStep::Identity => CheckoutStep::Address,
            CheckoutStep::Address | CheckoutStep::Payment => CheckoutStep::Payment,
            CheckoutStep::Confirmation => CheckoutStep::Confirmation,
        };
    }

    /// Goes back one step, never before [`CheckoutStep::Identity`].
    pub fn prev(&mut self) {
        self.step = match self.step {
            CheckoutStep::Identity | CheckoutStep::Address => CheckoutStep::Identity,
            CheckoutStep::Payment => CheckoutStep::Address,
            CheckoutStep::Confirmation => CheckoutStep::Confirmation,
        };
    }

    /// Copies contact fields from the logged-in profile into the draft.
    ///
    /// Fields the visitor already typed are not overwritten.
    pub fn prefill(&mut self) {
        let Some(customer) = self.customer_store.state().customer().cloned() else {
            return;
        };
        if self.draft.email.is_empty() {
            self.draft.email = customer.email;
        }
        if self.draft.first_name.is_empty() {
            self.draft.first_name = customer.first_name;
        }
        if self.draft.last_name.is_empty() {
            self.draft.last_name = customer.last_name;
        }
        if self.draft.phone.is_empty() {
            self.draft.phone = customer.phone.unwrap_or_default();
        }
    }

    /// Resolves the draft's postal code and fills street, city and
    /// state. Any lookup failure leaves the fields untouched.
    pub async fn lookup_postal_code(&mut self) {
        let Some(found) = self.lookup.lookup(&self.draft.address.postal_code).await else {
            return;
        };
        self.draft.address.address_line_1 = found.street;
        self.draft.address.city = found.city;
        self.draft.address.state = found.state;
    }

    /// Places the order.
    ///
    /// Runs the submission saga: provision a guest account when no
    /// session exists (failure tolerated, the order proceeds
    /// anonymously), attach the drafted address to the customer (failure
    /// tolerated, the order proceeds without an address reference), then
    /// create the order. On success the cart is cleared and the flow
    /// moves to [`CheckoutStep::Confirmation`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when order creation fails; the flow stays
    /// at its current step and the cart is untouched. Side effects of
    /// earlier saga steps are not rolled back.
    pub async fn submit(&mut self) -> Result<Order, ClientError> {
        let customer = self.resolve_customer().await;
        let address_id = match &customer {
            Some(customer) => self.attach_address(customer).await,
            None => None,
        };

        let draft = OrderDraft {
            customer_id: customer.as_ref().and_then(|c| c.id),
            shipping_address_id: address_id,
            billing_address_id: address_id,
            payment_method: self.draft.payment_method.as_str().to_string(),
            notes: none_if_empty(&self.draft.notes),
        };

        let order = self.orders.create(&draft).await?;
        self.cart_store.clear();
        self.step = CheckoutStep::Confirmation;
        Ok(order)
    }

    /// Returns the acting customer: the logged-in profile, or a freshly
    /// provisioned guest account. `None` when guest provisioning fails.
    async fn resolve_customer(&self) -> Option<Customer> {
        if let Some(customer) = self.customer_store.state().customer() {
            return Some(customer.clone());
        }

        let registration = Registration {
            email: self.draft.email.clone(),
            password: guest_password(),
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            phone: none_if_empty(&self.draft.phone),
            marketing_consent: false,
        };
        match self.customer_store.register(&registration).await {
            Ok(customer) => Some(customer),
            Err(err) => {
                tracing::warn!("guest account provisioning failed, ordering anonymously: {err}");
                None
            }
        }
    }

    /// Attaches the drafted address to the customer, returning its
    /// internal key. `None` when the attach fails or the address is
    /// blank.
    async fn attach_address(&self, customer: &Customer) -> Option<i64> {
        if self.draft.address.address_line_1.trim().is_empty() {
            return None;
        }

        let address = NewAddress {
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            address_line_1: self.draft.address.address_line_1.clone(),
            address_line_2: none_if_empty(&self.draft.address.address_line_2),
            city: self.draft.address.city.clone(),
            state: self.draft.address.state.clone(),
            postal_code: self.draft.address.postal_code.clone(),
            country: if self.draft.address.country.is_empty() {
                "BR".to_string()
            } else {
                self.draft.address.country.clone()
            },
            phone: none_if_empty(&self.draft.phone),
            is_default_shipping: true,
            is_default_billing: true,
        };

        match self.customers.add_address(&customer.pid, &address).await {
            Ok(saved) => saved.id,
            Err(err) => {
                tracing::warn!("address attach failed, ordering without one: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckoutStep::Identity.number(), 1);
        assert_eq!(CheckoutStep::Confirmation.number(), 4);
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(PaymentMethod::Pix.as_str(), "pix");
        assert_eq!(PaymentMethod::CreditCard.as_str(), "credit_card");
        assert_eq!(PaymentMethod::Boleto.as_str(), "boleto");
    }

    #[test]
    fn test_none_if_empty() {
        assert_eq!(none_if_empty("  "), None);
        assert_eq!(none_if_empty(" x "), Some("x".to_string()));
    }
}
