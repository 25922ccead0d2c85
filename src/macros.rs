#[macro_export]
macro_rules! commands_enum {
    ($($module:ident),*) => (
      paste::paste! {
        #[derive(Subcommand)]
        enum Commands {
            $(
              [<$module:camel>]($module::Args),
            )*
        }

        impl Commands {
            async fn exec(cli: Args) -> Result<()> {
              let configs = match cli.backend_url {
                Some(url) => Configs::with_backend_url(url),
                None => Configs::from_env(),
              };
              match cli.command {
                $(
                  Commands::[<$module:camel>](args) => $module::command(args, &configs, cli.json).await?,
                )*
              }
              Ok(())
            }
        }
      }
    );
}
