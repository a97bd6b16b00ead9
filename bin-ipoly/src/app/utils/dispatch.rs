macro_rules! dispatch_coeff {
    ($app:ident, $args:expr $(, $extra:expr)*) => {{
        use crate::app::utils::*;
        use num_bigint::BigInt;

        match $args.c_type {
            CType::I64    => run!(i64,    $app, $args $(, $extra)*),
            CType::I128   => run!(i128,   $app, $args $(, $extra)*),
            CType::BigInt => run!(BigInt, $app, $args $(, $extra)*),
        }
    }};
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr $(, $extra:expr)*) => {{
        log::info!("c-type: {}", std::any::type_name::<$c_type>());

        let mut app: $app<$c_type> = $app::new($args.clone() $(, $extra)*);
        app.run()
    }}
}

pub(crate) use {dispatch_coeff, run};
