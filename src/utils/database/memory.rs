use crate::{
    modules::{
        account::{
            repository::{Account, AccountPayload},
            USERNAME_TAKEN,
        },
        booking::{
            repository::{Booking, BookingPayload},
            USER_DOES_NOT_EXIST,
        },
        menu::repository::{MenuItem, MenuItemPayload, DEFAULT_INVENTORY},
        resource::repository::{Error, Repository, Result},
    },
    utils::pagination::{Paginated, Pagination},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use ulid::Ulid;

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    menu_items: Vec<MenuItem>,
    bookings: Vec<Booking>,
}

/// In-process store with the same constraints as the Postgres schema:
/// unique usernames, bookings that must reference an account, and cascade
/// deletion of an account's bookings. Records are kept in insertion order.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone>(records: &[T], pagination: &Pagination) -> Paginated<T> {
    let results = records
        .iter()
        .skip(pagination.offset() as usize)
        .take(pagination.per_page as usize)
        .cloned()
        .collect();

    Paginated::new(
        results,
        records.len() as u32,
        pagination.page,
        pagination.per_page,
    )
}

fn username_taken() -> Error {
    Error::Constraint {
        field: "username",
        code: "unique",
        message: USERNAME_TAKEN,
    }
}

fn unknown_user() -> Error {
    Error::Constraint {
        field: "user",
        code: "does_not_exist",
        message: USER_DOES_NOT_EXIST,
    }
}

#[async_trait]
impl Repository<Account> for MemoryDatabase {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<Account>> {
        Ok(paginate(&self.tables.lock().await.accounts, &pagination))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Account>> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().find(|account| account.id == id).cloned())
    }

    async fn create(&self, payload: AccountPayload) -> Result<Account> {
        let mut tables = self.tables.lock().await;
        if tables
            .accounts
            .iter()
            .any(|account| account.username == payload.username)
        {
            return Err(username_taken());
        }

        let account = Account {
            id: Ulid::new().to_string(),
            username: payload.username,
        };
        tables.accounts.push(account.clone());

        Ok(account)
    }

    async fn update_by_id(&self, id: String, payload: AccountPayload) -> Result<Option<Account>> {
        let mut tables = self.tables.lock().await;
        if tables
            .accounts
            .iter()
            .any(|account| account.username == payload.username && account.id != id)
        {
            return Err(username_taken());
        }

        Ok(tables
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .map(|account| {
                account.username = payload.username;
                account.clone()
            }))
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Account>> {
        let mut tables = self.tables.lock().await;
        let Some(position) = tables.accounts.iter().position(|account| account.id == id) else {
            return Ok(None);
        };

        tables.bookings.retain(|booking| booking.user != id);
        Ok(Some(tables.accounts.remove(position)))
    }
}

#[async_trait]
impl Repository<MenuItem> for MemoryDatabase {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<MenuItem>> {
        Ok(paginate(&self.tables.lock().await.menu_items, &pagination))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<MenuItem>> {
        let tables = self.tables.lock().await;
        Ok(tables.menu_items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, payload: MenuItemPayload) -> Result<MenuItem> {
        let item = MenuItem {
            id: Ulid::new().to_string(),
            title: payload.title,
            price: payload.price,
            inventory: payload.inventory.unwrap_or(DEFAULT_INVENTORY),
        };
        self.tables.lock().await.menu_items.push(item.clone());

        Ok(item)
    }

    async fn update_by_id(&self, id: String, payload: MenuItemPayload) -> Result<Option<MenuItem>> {
        let mut tables = self.tables.lock().await;

        Ok(tables
            .menu_items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| {
                item.title = payload.title;
                item.price = payload.price;
                if let Some(inventory) = payload.inventory {
                    item.inventory = inventory;
                }
                item.clone()
            }))
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<MenuItem>> {
        let mut tables = self.tables.lock().await;

        Ok(tables
            .menu_items
            .iter()
            .position(|item| item.id == id)
            .map(|position| tables.menu_items.remove(position)))
    }
}

#[async_trait]
impl Repository<Booking> for MemoryDatabase {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<Booking>> {
        Ok(paginate(&self.tables.lock().await.bookings, &pagination))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Booking>> {
        let tables = self.tables.lock().await;
        Ok(tables.bookings.iter().find(|booking| booking.id == id).cloned())
    }

    async fn create(&self, payload: BookingPayload) -> Result<Booking> {
        let mut tables = self.tables.lock().await;
        if !tables
            .accounts
            .iter()
            .any(|account| account.id == payload.user)
        {
            return Err(unknown_user());
        }

        let booking = Booking {
            id: Ulid::new().to_string(),
            user: payload.user,
            name: payload.name,
            no_of_guests: payload.no_of_guests,
            booking_date: payload.booking_date,
        };
        tables.bookings.push(booking.clone());

        Ok(booking)
    }

    async fn update_by_id(&self, id: String, payload: BookingPayload) -> Result<Option<Booking>> {
        let mut tables = self.tables.lock().await;
        if !tables
            .accounts
            .iter()
            .any(|account| account.id == payload.user)
        {
            return Err(unknown_user());
        }

        Ok(tables
            .bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .map(|booking| {
                booking.user = payload.user;
                booking.name = payload.name;
                booking.no_of_guests = payload.no_of_guests;
                booking.booking_date = payload.booking_date;
                booking.clone()
            }))
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Booking>> {
        let mut tables = self.tables.lock().await;

        Ok(tables
            .bookings
            .iter()
            .position(|booking| booking.id == id)
            .map(|position| tables.bookings.remove(position)))
    }
}
